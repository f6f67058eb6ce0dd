use crate::db::models::Idea;
use crate::db::repository::IdeaRepository;
use crate::error::AppError;
use crate::search::filter::{categories, filter_ideas, IdeaQuery};

/// The idea listing with its search/filter state applied.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Listing {
    pub ideas: Vec<Idea>,
    /// Every category present in the full listing, for the picker.
    pub categories: Vec<String>,
}

pub fn browse_ideas<S: IdeaRepository>(store: &S, query: &IdeaQuery) -> Result<Listing, AppError> {
    let all = store.list_ideas()?;
    Ok(Listing {
        categories: categories(&all),
        ideas: filter_ideas(&all, query),
    })
}
