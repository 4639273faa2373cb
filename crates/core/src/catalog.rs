use serde::Serialize;

/// Five colors indexed by activity level, lowest intensity first.
pub type Palette = [&'static str; 5];

pub const DEFAULT_PALETTE: &str = "light";

/// Read-only lookup tables the renderer draws names and colors from.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct Catalog {
    pub palettes: &'static [(&'static str, Palette)],
    pub months: [&'static str; 12],
    pub day_names: [&'static str; 7],
}

impl Catalog {
    pub const STANDARD: Catalog = Catalog {
        palettes: &[
            (
                "light",
                ["#ebedf0", "#c6e48b", "#7bc96f", "#239a3b", "#196127"],
            ),
            (
                "dark",
                ["#161b22", "#0e4429", "#006d32", "#26a641", "#39d353"],
            ),
            (
                "blue",
                ["#ebedf0", "#c0ddf9", "#73b3f3", "#3886e1", "#1b4f91"],
            ),
            (
                "orange",
                ["#ebedf0", "#ffdf80", "#ffa742", "#e87d2f", "#ac5219"],
            ),
            (
                "pink",
                ["#ebedf0", "#ffc0cb", "#ff69b4", "#ff1493", "#c71585"],
            ),
        ],
        months: [
            "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
        ],
        day_names: ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"],
    };

    pub fn palette(&self, name: &str) -> Option<&'static Palette> {
        self.palettes
            .iter()
            .find(|(candidate, _)| *candidate == name)
            .map(|(_, palette)| palette)
    }

    pub fn default_palette(&self) -> &'static Palette {
        self.palette(DEFAULT_PALETTE)
            .or_else(|| self.palettes.first().map(|(_, palette)| palette))
            .unwrap_or(&Self::STANDARD.palettes[0].1)
    }

    pub fn palette_names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.palettes.iter().map(|(name, _)| *name)
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::STANDARD
    }
}
