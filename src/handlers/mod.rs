pub mod auth;
pub mod dashboard;
pub mod health;
pub mod journals;
pub mod moods;
pub mod relief;
pub mod sessions;

/// Missing and empty-string fields are both treated as absent.
pub(crate) fn non_empty(field: &Option<String>) -> Option<&str> {
    field.as_deref().filter(|s| !s.is_empty())
}
