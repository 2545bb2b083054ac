/// Application targets shipped by the template monorepo.
///
/// The web app is mandatory (backend services live there); mobile and the
/// browser extension are optional and get stripped from the scaffold when not
/// selected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum App {
    Web,
    Mobile,
    Extension,
}

impl App {
    /// All apps in declaration order. Directive application follows this order.
    pub const ALL: [App; 3] = [App::Web, App::Mobile, App::Extension];

    /// Stable identifier used in template paths.
    pub fn slug(self) -> &'static str {
        match self {
            App::Web => "web",
            App::Mobile => "mobile",
            App::Extension => "extension",
        }
    }

    /// Human-readable name used in prompts.
    pub fn display_name(self) -> &'static str {
        match self {
            App::Web => "Web app",
            App::Mobile => "Mobile app",
            App::Extension => "Browser extension",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn declaration_order_starts_with_web() {
        assert_eq!(App::ALL[0], App::Web);
        assert_eq!(App::ALL.len(), 3);
    }
}
