#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Service {
    pub icon: &'static str,
    pub title: &'static str,
    pub subtitle: &'static str,
    pub description: &'static str,
}

pub const SERVICES: [Service; 4] = [
    Service {
        icon: "users",
        title: "Executive Search",
        subtitle: "Lorem Ipsum Leadership",
        description: "Ut enim ad minim veniam quis nostrud exercitation ullamco laboris nisi ut aliquip ex ea commodo consequat. Duis aute irure dolor in reprehenderit in voluptate velit esse cillum dolore eu fugiat nulla pariatur.",
    },
    Service {
        icon: "target",
        title: "Professional Recruiting",
        subtitle: "Lorem Ipsum Talent",
        description: "Excepteur sint occaecat cupidatat non proident sunt in culpa qui officia deserunt mollit anim id est laborum sed ut perspiciatis unde omnis iste natus error.",
    },
    Service {
        icon: "award",
        title: "Interim Solutions",
        subtitle: "Lorem Ipsum Bridge",
        description: "Nemo enim ipsam voluptatem quia voluptas sit aspernatur aut odit aut fugit sed quia consequuntur magni dolores eos qui ratione voluptatem sequi nesciunt.",
    },
    Service {
        icon: "briefcase",
        title: "Talent Advisory",
        subtitle: "Lorem Ipsum Strategy",
        description: "Neque porro quisquam est qui dolorem ipsum quia dolor sit amet consectetur adipisci velit sed quia non numquam eius modi tempora incidunt.",
    },
];

const TAB_BASE: &str = "service-tab-btn px-6 py-3 rounded-lg font-medium transition-all duration-300";

pub fn tab_class(active: bool) -> String {
    if active {
        format!("{} bg-accent text-accent-foreground", TAB_BASE)
    } else {
        format!("{} bg-muted text-muted-foreground hover:bg-accent/10 hover:text-accent", TAB_BASE)
    }
}

/// Which catalog entry the services panel shows.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ServicesSelection {
    active_index: usize,
    len: usize,
}

impl Default for ServicesSelection {
    fn default() -> Self {
        Self::new(SERVICES.len())
    }
}

impl ServicesSelection {
    pub fn new(len: usize) -> Self {
        Self { active_index: 0, len }
    }

    pub fn active_index(&self) -> usize {
        self.active_index
    }

    /// Requests outside the catalog are dropped without touching the
    /// current selection.
    pub fn select(&mut self, index: usize) -> bool {
        if index >= self.len {
            return false;
        }
        self.active_index = index;
        true
    }

    pub fn tab_classes(&self) -> Vec<String> {
        (0..self.len).map(|i| tab_class(i == self.active_index)).collect()
    }
}

pub fn active_service(selection: &ServicesSelection) -> &'static Service {
    &SERVICES[selection.active_index().min(SERVICES.len() - 1)]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn active_count(classes: &[String]) -> usize {
        classes.iter().filter(|c| c.contains("bg-accent text-accent-foreground")).count()
    }

    #[test]
    fn starts_on_first_service() {
        let selection = ServicesSelection::default();
        assert_eq!(selection.active_index(), 0);
        assert_eq!(active_service(&selection).title, "Executive Search");
    }

    #[test]
    fn in_range_select_activates_exactly_one_tab() {
        for index in 0..SERVICES.len() {
            let mut selection = ServicesSelection::default();
            assert!(selection.select(index));
            let classes = selection.tab_classes();
            assert_eq!(classes.len(), SERVICES.len());
            assert_eq!(active_count(&classes), 1);
            assert_eq!(classes[index], tab_class(true));
            assert_eq!(active_service(&selection), &SERVICES[index]);
        }
    }

    #[test]
    fn out_of_range_select_changes_nothing() {
        let mut selection = ServicesSelection::default();
        selection.select(2);
        let before_classes = selection.tab_classes();
        let before_service = *active_service(&selection);

        for index in [4, 5, 100, usize::MAX] {
            assert!(!selection.select(index));
            assert_eq!(selection.active_index(), 2);
            assert_eq!(selection.tab_classes(), before_classes);
            assert_eq!(*active_service(&selection), before_service);
        }
    }

    #[test]
    fn inactive_tabs_keep_hover_affordance() {
        let inactive = tab_class(false);
        assert!(inactive.starts_with("service-tab-btn"));
        assert!(inactive.contains("hover:text-accent"));
        assert!(!tab_class(true).contains("hover:"));
    }
}
