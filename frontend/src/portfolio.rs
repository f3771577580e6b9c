#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    Ecommerce,
    Corporate,
    Startup,
}

impl Category {
    pub fn label(self) -> &'static str {
        match self {
            Category::Ecommerce => "E-commerce Platform",
            Category::Corporate => "Corporate Website",
            Category::Startup => "Startup Landing",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PortfolioFilter {
    #[default]
    All,
    Only(Category),
}

impl PortfolioFilter {
    /// Button order in the filter bar.
    pub const ALL: [PortfolioFilter; 4] = [
        PortfolioFilter::All,
        PortfolioFilter::Only(Category::Ecommerce),
        PortfolioFilter::Only(Category::Corporate),
        PortfolioFilter::Only(Category::Startup),
    ];

    pub fn matches(self, category: Category) -> bool {
        match self {
            PortfolioFilter::All => true,
            PortfolioFilter::Only(wanted) => wanted == category,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Project {
    pub category: Category,
    pub title: &'static str,
    pub description: &'static str,
}

pub fn filter_projects(projects: &[Project], filter: PortfolioFilter) -> impl Iterator<Item = &Project> {
    projects.iter().filter(move |project| filter.matches(project.category))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::strings;
    use crate::state::Language;

    #[test]
    fn test_all_shows_everything() {
        let projects = strings(Language::En).projects;
        assert_eq!(filter_projects(projects, PortfolioFilter::All).count(), projects.len());
    }

    #[test]
    fn test_filter_by_category() {
        let projects = strings(Language::En).projects;
        let titles: Vec<&str> = filter_projects(projects, PortfolioFilter::Only(Category::Ecommerce))
            .map(|p| p.title)
            .collect();
        assert_eq!(titles, vec!["Modern E-commerce Platform", "Mobile Commerce App"]);

        assert_eq!(
            filter_projects(projects, PortfolioFilter::Only(Category::Startup)).count(),
            1
        );
    }

    #[test]
    fn test_filter_is_language_independent() {
        for filter in PortfolioFilter::ALL {
            let en = filter_projects(strings(Language::En).projects, filter).count();
            let ko = filter_projects(strings(Language::Ko).projects, filter).count();
            assert_eq!(en, ko, "{:?}", filter);
        }
    }
}
