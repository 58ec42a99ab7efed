use strum_macros::{Display, EnumIter};

/// Which module the shell is showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Display, EnumIter)]
#[strum(serialize_all = "snake_case")]
pub enum Tab {
    #[default]
    Image,
    Tabular,
}

impl Tab {
    pub fn title(self) -> &'static str {
        match self {
            Tab::Image => "Image Classification",
            Tab::Tabular => "Tabular Data",
        }
    }
}
