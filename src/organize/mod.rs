//! Grouping of catalog records into the author/series/book layout

pub mod tree;

use serde::Serialize;
use std::collections::BTreeMap;

use crate::catalog::Audiobook;

/// All books by one author, split into series and standalone books
#[derive(Debug, Serialize)]
pub struct AuthorGroup<'a> {
    pub name: &'a str,
    pub series: Vec<SeriesGroup<'a>>,
    /// Books without a series, ordered by title
    pub books: Vec<&'a Audiobook>,
}

/// Books of one series by a single author, ordered by series sequence
#[derive(Debug, Serialize)]
pub struct SeriesGroup<'a> {
    pub name: &'a str,
    pub books: Vec<&'a Audiobook>,
}

impl AuthorGroup<'_> {
    /// Number of books under this author, series and standalone
    pub fn book_count(&self) -> usize {
        self.books.len() + self.series.iter().map(|s| s.books.len()).sum::<usize>()
    }
}

/// Group records by author and series
///
/// Authors and series come out in byte order of their names. Books inside a
/// series are ordered by `series_sequence` compared as a string, with a
/// missing sequence sorting first; standalone books are ordered by title.
/// Sorting is stable, so records with equal keys keep their input order.
pub fn organize(books: &[Audiobook]) -> Vec<AuthorGroup<'_>> {
    let mut by_author: BTreeMap<&str, Vec<&Audiobook>> = BTreeMap::new();
    for book in books {
        by_author.entry(book.author.as_str()).or_default().push(book);
    }

    by_author
        .into_iter()
        .map(|(name, author_books)| group_author(name, author_books))
        .collect()
}

fn group_author<'a>(name: &'a str, author_books: Vec<&'a Audiobook>) -> AuthorGroup<'a> {
    let mut by_series: BTreeMap<&str, Vec<&Audiobook>> = BTreeMap::new();
    let mut standalone = Vec::new();

    for book in author_books {
        match book.series_name.as_deref() {
            Some(series) => by_series.entry(series).or_default().push(book),
            None => standalone.push(book),
        }
    }

    let series = by_series
        .into_iter()
        .map(|(series_name, mut books)| {
            books.sort_by(|a, b| sequence_key(a).cmp(sequence_key(b)));
            SeriesGroup {
                name: series_name,
                books,
            }
        })
        .collect();

    standalone.sort_by(|a, b| a.title.cmp(&b.title));

    AuthorGroup {
        name,
        series,
        books: standalone,
    }
}

fn sequence_key(book: &Audiobook) -> &str {
    book.series_sequence.as_deref().unwrap_or("")
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    pub(crate) fn book(author: &str, title: &str, series: Option<(&str, Option<&str>)>) -> Audiobook {
        Audiobook {
            author: author.to_string(),
            title: title.to_string(),
            series_name: series.map(|(name, _)| name.to_string()),
            series_sequence: series.and_then(|(_, seq)| seq.map(String::from)),
            ..Default::default()
        }
    }

    fn titles(books: &[&Audiobook]) -> Vec<String> {
        books.iter().map(|b| b.title.clone()).collect()
    }

    #[test]
    fn test_series_ordered_by_sequence() {
        let books = vec![
            book("A", "Second", Some(("S", Some("2")))),
            book("A", "First", Some(("S", Some("1")))),
        ];

        let authors = organize(&books);

        assert_eq!(authors.len(), 1);
        assert_eq!(authors[0].name, "A");
        assert_eq!(authors[0].series.len(), 1);
        assert_eq!(authors[0].series[0].name, "S");
        assert_eq!(titles(&authors[0].series[0].books), vec!["First", "Second"]);
        assert!(authors[0].books.is_empty());
    }

    #[test]
    fn test_standalone_book_has_no_series() {
        let books = vec![book("A", "Alone", None)];

        let authors = organize(&books);

        assert_eq!(authors.len(), 1);
        assert!(authors[0].series.is_empty());
        assert_eq!(titles(&authors[0].books), vec!["Alone"]);
    }

    #[test]
    fn test_sequence_compared_as_string() {
        let books = vec![
            book("A", "Two", Some(("S", Some("2")))),
            book("A", "Ten", Some(("S", Some("10")))),
            book("A", "One", Some(("S", Some("1")))),
        ];

        let authors = organize(&books);
        assert_eq!(
            titles(&authors[0].series[0].books),
            vec!["One", "Ten", "Two"]
        );
    }

    #[test]
    fn test_missing_sequence_sorts_first() {
        let books = vec![
            book("A", "Numbered", Some(("S", Some("1")))),
            book("A", "Unnumbered", Some(("S", None))),
        ];

        let authors = organize(&books);
        assert_eq!(
            titles(&authors[0].series[0].books),
            vec!["Unnumbered", "Numbered"]
        );
    }

    #[test]
    fn test_authors_in_byte_order_without_normalization() {
        let books = vec![
            book("alice", "T1", None),
            book("Bob", "T2", None),
            book("Alice", "T3", None),
            book("Alice ", "T4", None),
        ];

        let authors = organize(&books);
        let names: Vec<_> = authors.iter().map(|a| a.name).collect();
        assert_eq!(names, vec!["Alice", "Alice ", "Bob", "alice"]);
    }

    #[test]
    fn test_series_scoped_to_author() {
        let books = vec![
            book("A", "A1", Some(("Shared", Some("1")))),
            book("B", "B1", Some(("Shared", Some("1")))),
        ];

        let authors = organize(&books);

        assert_eq!(authors.len(), 2);
        for author in &authors {
            assert_eq!(author.series.len(), 1);
            assert_eq!(author.series[0].books.len(), 1);
            assert_eq!(author.series[0].books[0].author, author.name);
        }
    }

    #[test]
    fn test_series_and_standalone_ordering() {
        let books = vec![
            book("A", "Zebra", None),
            book("A", "Middle", Some(("Beta", Some("1")))),
            book("A", "Apple", None),
            book("A", "Start", Some(("Alpha", Some("1")))),
        ];

        let authors = organize(&books);
        let series: Vec<_> = authors[0].series.iter().map(|s| s.name).collect();
        assert_eq!(series, vec!["Alpha", "Beta"]);
        assert_eq!(titles(&authors[0].books), vec!["Apple", "Zebra"]);
    }

    #[test]
    fn test_equal_keys_keep_input_order() {
        let books = vec![
            book("A", "First In", Some(("S", Some("1")))),
            book("A", "Second In", Some(("S", Some("1")))),
            book("A", "Same", None),
            book("A", "Same", None),
        ];

        let authors = organize(&books);
        assert_eq!(
            titles(&authors[0].series[0].books),
            vec!["First In", "Second In"]
        );
        assert!(std::ptr::eq(authors[0].books[0], &books[2]));
        assert!(std::ptr::eq(authors[0].books[1], &books[3]));
    }

    #[test]
    fn test_every_record_appears_exactly_once() {
        let books = vec![
            book("B", "B2", Some(("S", Some("2")))),
            book("A", "A1", None),
            book("B", "B1", Some(("S", Some("1")))),
            book("C", "C1", Some(("T", None))),
            book("A", "A2", Some(("S", Some("1")))),
        ];

        let authors = organize(&books);

        let mut seen: Vec<*const Audiobook> = Vec::new();
        for author in &authors {
            for series in &author.series {
                for b in &series.books {
                    assert_eq!(b.author, author.name);
                    assert_eq!(b.series_name.as_deref(), Some(series.name));
                    seen.push(*b as *const Audiobook);
                }
            }
            for b in &author.books {
                assert_eq!(b.author, author.name);
                assert!(b.series_name.is_none());
                seen.push(*b as *const Audiobook);
            }
        }

        assert_eq!(seen.len(), books.len());
        for b in &books {
            assert_eq!(seen.iter().filter(|p| std::ptr::eq(**p, b)).count(), 1);
        }
        assert_eq!(authors.iter().map(|a| a.book_count()).sum::<usize>(), 5);
    }

    #[test]
    fn test_empty_input() {
        assert!(organize(&[]).is_empty());
    }
}
