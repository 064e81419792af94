use crate::components::icons::Icon;

pub const ARTIST_NAME: &str = "Aaditya Tiwari";
pub const CONTACT_EMAIL: &str = "hello@aadityatiwari.com";
pub const CONTACT_PHONE: &str = "+91 98765 43210";
pub const INSTAGRAM_URL: &str = "https://instagram.com";

pub const HERO_IMAGE: &str =
    "https://images.unsplash.com/photo-1758749220219-83a817a9356d?crop=entropy&cs=srgb&fm=jpg&q=85";

const BRIDAL_IMAGE: &str =
    "https://images.unsplash.com/photo-1710494422513-84f510745792?crop=entropy&cs=srgb&fm=jpg&q=85";
const CELEBRITY_IMAGE: &str =
    "https://images.unsplash.com/photo-1758749652183-3c7bb8f9641d?crop=entropy&cs=srgb&fm=jpg&q=85";
const MODELS_IMAGE: &str =
    "https://images.unsplash.com/photo-1742893071818-ba15a3b588a0?crop=entropy&cs=srgb&fm=jpg&q=85";
const SHOOTS_IMAGE: &str =
    "https://images.unsplash.com/photo-1684868265714-fd2300637c23?crop=entropy&cs=srgb&fm=jpg&q=85";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Category {
    Bridal,
    Celebrity,
    Models,
    Shoots,
}

impl Category {
    pub fn id(self) -> &'static str {
        match self {
            Category::Bridal => "bridal",
            Category::Celebrity => "celebrity",
            Category::Models => "models",
            Category::Shoots => "shoots",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Category::Bridal => "Bridal",
            Category::Celebrity => "Celebrity",
            Category::Models => "Models",
            Category::Shoots => "Shoots",
        }
    }
}

/// Gallery selection. `All` is the "all" sentinel; anything else is one of
/// the declared categories, so an out-of-set filter cannot be represented.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum PortfolioFilter {
    #[default]
    All,
    Only(Category),
}

impl PortfolioFilter {
    /// Filter buttons in display order.
    pub const CHOICES: [PortfolioFilter; 5] = [
        PortfolioFilter::All,
        PortfolioFilter::Only(Category::Bridal),
        PortfolioFilter::Only(Category::Celebrity),
        PortfolioFilter::Only(Category::Models),
        PortfolioFilter::Only(Category::Shoots),
    ];

    pub fn id(self) -> &'static str {
        match self {
            PortfolioFilter::All => "all",
            PortfolioFilter::Only(category) => category.id(),
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            PortfolioFilter::All => "All Work",
            PortfolioFilter::Only(category) => category.label(),
        }
    }

    pub fn test_id(self) -> String {
        format!("filter-{}", self.id())
    }

    pub fn admits(self, category: Category) -> bool {
        match self {
            PortfolioFilter::All => true,
            PortfolioFilter::Only(selected) => selected == category,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct PortfolioItem {
    pub id: u32,
    pub image: &'static str,
    pub category: Category,
    pub title: &'static str,
}

impl PortfolioItem {
    pub fn test_id(&self) -> String {
        format!("portfolio-item-{}", self.id)
    }
}

pub static PORTFOLIO: [PortfolioItem; 6] = [
    PortfolioItem {
        id: 1,
        image: BRIDAL_IMAGE,
        category: Category::Bridal,
        title: "Traditional Bridal",
    },
    PortfolioItem {
        id: 2,
        image: CELEBRITY_IMAGE,
        category: Category::Celebrity,
        title: "Editorial Glamour",
    },
    PortfolioItem {
        id: 3,
        image: MODELS_IMAGE,
        category: Category::Models,
        title: "Fashion Model",
    },
    PortfolioItem {
        id: 4,
        image: SHOOTS_IMAGE,
        category: Category::Shoots,
        title: "Bridal Detail",
    },
    PortfolioItem {
        id: 5,
        image: "https://images.unsplash.com/photo-1765852549357-7dc1979a4ead?crop=entropy&cs=srgb&fm=jpg&q=85",
        category: Category::Shoots,
        title: "Professional Shoot",
    },
    PortfolioItem {
        id: 6,
        image: "https://images.unsplash.com/photo-1590156351813-11741a501057?crop=entropy&cs=srgb&fm=jpg&q=85",
        category: Category::Celebrity,
        title: "Luxury Beauty",
    },
];

/// Items admitted by `filter`, in their original relative order.
pub fn filter_portfolio(items: &[PortfolioItem], filter: PortfolioFilter) -> Vec<&PortfolioItem> {
    items
        .iter()
        .filter(|item| filter.admits(item.category))
        .collect()
}

#[derive(Clone, Debug, PartialEq)]
pub struct ServiceOffering {
    pub title: &'static str,
    pub description: &'static str,
    pub image: &'static str,
    pub test_id: &'static str,
}

pub static SERVICES: [ServiceOffering; 4] = [
    ServiceOffering {
        title: "Bridal Makeup",
        description: "Exquisite bridal looks that capture your essence on your special day. Traditional to contemporary styles.",
        image: BRIDAL_IMAGE,
        test_id: "service-bridal",
    },
    ServiceOffering {
        title: "Celebrity Makeup",
        description: "Red carpet glamour and high-profile event styling. Flawless camera-ready looks for the spotlight.",
        image: CELEBRITY_IMAGE,
        test_id: "service-celebrity",
    },
    ServiceOffering {
        title: "Model Shoots",
        description: "Editorial and commercial makeup for fashion photography. Bold, creative, and trend-setting aesthetics.",
        image: MODELS_IMAGE,
        test_id: "service-models",
    },
    ServiceOffering {
        title: "Photo Shoots",
        description: "Professional makeup for all types of photoshoots. From lifestyle to high-fashion editorial work.",
        image: SHOOTS_IMAGE,
        test_id: "service-shoots",
    },
];

#[derive(Clone, Debug, PartialEq)]
pub struct ProcessStep {
    pub number: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

pub static PROCESS_STEPS: [ProcessStep; 4] = [
    ProcessStep {
        number: "01",
        title: "Consultation",
        description: "We discuss your vision, preferences, and the occasion. Understanding your style is the foundation of creating the perfect look.",
    },
    ProcessStep {
        number: "02",
        title: "Preparation",
        description: "Skincare prep and primer application to ensure a flawless base. Your skin is prepped for long-lasting, camera-ready results.",
    },
    ProcessStep {
        number: "03",
        title: "Application",
        description: "Expert makeup application using premium products. Every detail is carefully crafted to enhance your natural beauty.",
    },
    ProcessStep {
        number: "04",
        title: "Final Touch",
        description: "Setting and perfecting the look with final adjustments. Ensuring everything is flawless before your big moment.",
    },
];

#[derive(Clone, Debug, PartialEq)]
pub struct StatEntry {
    pub icon: Icon,
    pub value: &'static str,
    pub label: &'static str,
    pub test_id: &'static str,
}

pub static STATS: [StatEntry; 3] = [
    StatEntry {
        icon: Icon::Clock,
        value: "5+",
        label: "Years Experience",
        test_id: "stat-experience",
    },
    StatEntry {
        icon: Icon::Users,
        value: "500+",
        label: "Happy Clients",
        test_id: "stat-clients",
    },
    StatEntry {
        icon: Icon::Star,
        value: "100%",
        label: "Satisfaction",
        test_id: "stat-satisfaction",
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(items: &[&PortfolioItem]) -> Vec<u32> {
        items.iter().map(|item| item.id).collect()
    }

    #[test]
    fn all_returns_the_full_list_unchanged() {
        let filtered = filter_portfolio(&PORTFOLIO, PortfolioFilter::All);
        assert_eq!(ids(&filtered), vec![1, 2, 3, 4, 5, 6]);
    }

    #[test]
    fn category_filter_keeps_only_matching_items_in_order() {
        for filter in PortfolioFilter::CHOICES {
            let PortfolioFilter::Only(category) = filter else {
                continue;
            };
            let filtered = filter_portfolio(&PORTFOLIO, PortfolioFilter::Only(category));
            assert!(!filtered.is_empty(), "{} has no items", category.id());
            assert!(filtered.iter().all(|item| item.category == category));

            let expected: Vec<u32> = PORTFOLIO
                .iter()
                .filter(|item| item.category == category)
                .map(|item| item.id)
                .collect();
            assert_eq!(ids(&filtered), expected);
        }
    }

    #[test]
    fn celebrity_selects_items_two_and_six() {
        let filtered = filter_portfolio(&PORTFOLIO, PortfolioFilter::Only(Category::Celebrity));
        assert_eq!(ids(&filtered), vec![2, 6]);
        assert_eq!(filtered[0].title, "Editorial Glamour");
        assert_eq!(filtered[1].title, "Luxury Beauty");
    }

    #[test]
    fn filtering_an_empty_list_yields_nothing() {
        assert!(filter_portfolio(&[], PortfolioFilter::Only(Category::Models)).is_empty());
        assert!(filter_portfolio(&[], PortfolioFilter::All).is_empty());
    }

    #[test]
    fn filter_choices_start_with_all_and_cover_every_category() {
        assert_eq!(PortfolioFilter::CHOICES[0], PortfolioFilter::All);
        for category in [
            Category::Bridal,
            Category::Celebrity,
            Category::Models,
            Category::Shoots,
        ] {
            assert!(PortfolioFilter::CHOICES.contains(&PortfolioFilter::Only(category)));
        }
        assert_eq!(PortfolioFilter::All.test_id(), "filter-all");
        assert_eq!(PortfolioFilter::Only(Category::Shoots).label(), "Shoots");
    }
}
