/// Stylesheet flavor selected at project creation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum StyleFlavor {
    #[default]
    Plain,
    Less,
    Sass,
}

impl StyleFlavor {
    /// File extension for the project's stylesheet.
    pub fn extension(&self) -> &'static str {
        match self {
            StyleFlavor::Plain => "css",
            StyleFlavor::Less => "less",
            StyleFlavor::Sass => "scss",
        }
    }

    /// Extra dev dependency the flavor's preprocessor needs, if any.
    pub fn extra_dev_dependency(&self) -> Option<&'static str> {
        match self {
            StyleFlavor::Plain => None,
            StyleFlavor::Less => Some("less"),
            StyleFlavor::Sass => Some("sass"),
        }
    }
}
