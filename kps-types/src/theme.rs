use crate::segment::ColorPair;

/// Named color roles available to prompt modules.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    pub kube_cluster: ColorPair,
    pub kube_namespace: ColorPair,
    pub kube_prod: ColorPair,
    pub shell_var: ColorPair,
}

impl Default for Theme {
    fn default() -> Self {
        Theme {
            kube_cluster: ColorPair::ansi(117, 26),
            kube_namespace: ColorPair::ansi(170, 17),
            kube_prod: ColorPair::ansi(15, 124),
            shell_var: ColorPair::ansi(52, 11),
        }
    }
}

impl Theme {
    /// Muted palette for light terminals.
    pub fn low_contrast() -> Self {
        Theme {
            kube_cluster: ColorPair::ansi(0, 152),
            kube_namespace: ColorPair::ansi(0, 189),
            kube_prod: ColorPair::ansi(15, 131),
            shell_var: ColorPair::ansi(0, 229),
        }
    }
}
