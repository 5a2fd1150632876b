//! Query/command layer. Every write runs in its own transaction which is
//! committed on success and rolled back when dropped on any error path.

mod artists;
mod shows;
mod venues;

pub use artists::ArtistRepository;
pub use shows::{ShowListing, ShowRepository};
pub use venues::{group_by_city, CityArea, VenueRepository, VenueSummary};

use sea_orm::{
    sea_query::{Expr, Func, SimpleExpr},
    ColumnTrait,
};

/// Rows matching a name search. `count` is always `items.len()`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchResults<T> {
    pub count: usize,
    pub items: Vec<T>,
}

impl<T> SearchResults<T> {
    pub fn new(items: Vec<T>) -> Self {
        Self {
            count: items.len(),
            items,
        }
    }
}

/// Escapes LIKE metacharacters so the term matches literally.
pub(crate) fn escape_like(term: &str) -> String {
    let mut escaped = String::with_capacity(term.len());
    for c in term.chars() {
        if matches!(c, '\\' | '%' | '_') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}

/// Case-insensitive `column LIKE %term%`. An empty term matches every row.
///
/// Both operands are folded by the database's `LOWER` so the column and the
/// term always get the same case mapping.
pub(crate) fn name_contains<C: ColumnTrait>(column: C, term: &str) -> SimpleExpr {
    let pattern = format!("%{}%", escape_like(term));
    Expr::cust_with_exprs(
        "$1 LIKE $2 ESCAPE '\\'",
        [
            Func::lower(Expr::col(column)).into(),
            Func::lower(Expr::val(pattern)).into(),
        ],
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escapes_like_metacharacters() {
        assert_eq!(escape_like("50% off_now\\"), "50\\% off\\_now\\\\");
        assert_eq!(escape_like("plain"), "plain");
    }

    #[test]
    fn search_results_count_matches_items() {
        let results = SearchResults::new(vec!["a", "b", "c"]);
        assert_eq!(results.count, 3);
        assert_eq!(results.count, results.items.len());
    }
}
