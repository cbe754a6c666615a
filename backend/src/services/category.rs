use log::warn;

/// Display name used for category ids outside the known set.
pub const OTHER_CATEGORY: &str = "Other";

/// Content categories this service understands, keyed to the YouTube
/// `videoCategoryId` vocabulary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Music,
    Gaming,
    Entertainment,
    News,
    Science,
    Sports,
    Education,
    Comedy,
    People,
}

impl Category {
    pub const ALL: [Category; 9] = [
        Category::Music,
        Category::Gaming,
        Category::Entertainment,
        Category::News,
        Category::Science,
        Category::Sports,
        Category::Education,
        Category::Comedy,
        Category::People,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Category::Music => "Music",
            Category::Gaming => "Gaming",
            Category::Entertainment => "Entertainment",
            Category::News => "News",
            Category::Science => "Science",
            Category::Sports => "Sports",
            Category::Education => "Education",
            Category::Comedy => "Comedy",
            Category::People => "People",
        }
    }

    pub fn youtube_id(self) -> &'static str {
        match self {
            Category::Music => "10",
            Category::Gaming => "20",
            Category::Entertainment => "24",
            Category::News => "25",
            Category::Science => "28",
            Category::Sports => "17",
            Category::Education => "27",
            Category::Comedy => "23",
            Category::People => "22",
        }
    }

    pub fn from_name(name: &str) -> Option<Category> {
        Self::ALL.into_iter().find(|c| c.name() == name)
    }

    pub fn from_youtube_id(id: &str) -> Option<Category> {
        Self::ALL.into_iter().find(|c| c.youtube_id() == id)
    }
}

pub fn name_to_id(name: &str) -> Option<&'static str> {
    Category::from_name(name).map(Category::youtube_id)
}

pub fn id_to_name(id: &str) -> &'static str {
    Category::from_youtube_id(id)
        .map(Category::name)
        .unwrap_or(OTHER_CATEGORY)
}

/// Builds the single `videoCategoryId` filter for a general trends query by
/// concatenating the ids of every known requested name. The API accepts one
/// id per query, so more than one name produces a token that rarely matches
/// a real category; this is kept as-is. Returns `None` when nothing resolves.
pub fn concatenated_category_filter(names: &[String]) -> Option<String> {
    let mut filter = String::new();
    for name in names {
        match name_to_id(name) {
            Some(id) => filter.push_str(id),
            None => warn!("Ignoring unknown category '{name}' in trends request"),
        }
    }

    if filter.is_empty() {
        None
    } else {
        Some(filter)
    }
}
