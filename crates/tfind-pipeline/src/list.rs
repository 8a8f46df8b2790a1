//! Row view models for the "details" list.

use tfind_core::TheaterRecord;

/// Image asset shown on every row.
pub const LOGO_ASSET: &str = "Cineplex_Logo";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TheaterRow {
    pub name: String,
    pub address: String,
    pub logo: &'static str,
}

/// One row per theatre, in input order. No sorting and no paging.
#[derive(Debug, Clone, Default)]
pub struct TheaterListPresenter {
    theaters: Vec<TheaterRecord>,
    rows: Vec<TheaterRow>,
}

impl TheaterListPresenter {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the list with `theaters` and returns the rows.
    pub fn render(&mut self, theaters: &[TheaterRecord]) -> &[TheaterRow] {
        self.theaters = theaters.to_vec();
        self.rows = theaters
            .iter()
            .map(|t| TheaterRow {
                name: t.name.clone(),
                address: t.address.clone(),
                logo: LOGO_ASSET,
            })
            .collect();
        &self.rows
    }

    #[must_use]
    pub fn rows(&self) -> &[TheaterRow] {
        &self.rows
    }

    /// The record behind row `index` (0-based), for the detail page.
    #[must_use]
    pub fn select(&self, index: usize) -> Option<&TheaterRecord> {
        self.theaters.get(index)
    }
}

#[cfg(test)]
mod tests {
    use tfind_core::Coordinate;

    use super::*;

    fn theater(name: &str) -> TheaterRecord {
        TheaterRecord {
            name: name.to_string(),
            address: format!("1 {name} Street, Toronto, ON M1M 1M1"),
            coordinate: Coordinate::new(43.6, -79.4),
            url_slug: name.to_lowercase(),
            distance: 2.0,
            url: format!("https://www.cineplex.com/Theatre/{}", name.to_lowercase()),
        }
    }

    #[test]
    fn render_keeps_input_order_and_static_logo() {
        let mut list = TheaterListPresenter::new();
        let rows = list.render(&[theater("Zeta"), theater("Alpha"), theater("Mu")]);

        let names: Vec<&str> = rows.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["Zeta", "Alpha", "Mu"]);
        assert!(rows.iter().all(|r| r.logo == "Cineplex_Logo"));
        assert_eq!(rows[1].address, "1 Alpha Street, Toronto, ON M1M 1M1");
    }

    #[test]
    fn render_of_empty_input_has_no_rows() {
        let mut list = TheaterListPresenter::new();
        assert!(list.render(&[]).is_empty());
        assert!(list.select(0).is_none());
    }

    #[test]
    fn render_replaces_previous_rows() {
        let mut list = TheaterListPresenter::new();
        list.render(&[theater("Alpha"), theater("Beta")]);
        list.render(&[theater("Gamma")]);
        assert_eq!(list.rows().len(), 1);
        assert_eq!(list.select(0).map(|t| t.name.as_str()), Some("Gamma"));
        assert!(list.select(1).is_none());
    }

    #[test]
    fn select_returns_record_for_row() {
        let mut list = TheaterListPresenter::new();
        list.render(&[theater("Alpha"), theater("Beta")]);
        let record = list.select(1).expect("row 1 exists");
        assert_eq!(record.url, "https://www.cineplex.com/Theatre/beta");
    }
}
