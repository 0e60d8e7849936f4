use super::AuthorGroup;
use crate::catalog::Audiobook;

/// A node in the rendered tree, in display order
#[derive(Debug)]
struct TreeNode {
    label: String,
    children: Vec<TreeNode>,
}

impl TreeNode {
    fn dir(name: &str, children: Vec<TreeNode>) -> Self {
        Self {
            label: format!("{}/", name),
            children,
        }
    }

    fn book(book: &Audiobook, show_sequence: bool) -> Self {
        let label = match book.series_sequence.as_deref() {
            Some(seq) if show_sequence => format!("#{} {}", seq, book.title),
            _ => book.title.clone(),
        };
        Self {
            label,
            children: Vec::new(),
        }
    }
}

/// Render the organized library as a tree, series before standalone books
pub fn render_tree(authors: &[AuthorGroup]) -> String {
    let mut output = String::new();

    for author in authors {
        let mut children: Vec<TreeNode> = author
            .series
            .iter()
            .map(|series| {
                let books = series
                    .books
                    .iter()
                    .map(|b| TreeNode::book(b, true))
                    .collect();
                TreeNode::dir(series.name, books)
            })
            .collect();
        children.extend(author.books.iter().map(|b| TreeNode::book(b, false)));

        output.push_str(&format!("{}/\n", author.name));
        render_children(&children, &mut output, "");
    }

    output
}

fn render_children(nodes: &[TreeNode], output: &mut String, prefix: &str) {
    let count = nodes.len();

    for (i, node) in nodes.iter().enumerate() {
        let is_last = i == count - 1;
        let connector = if is_last { "└── " } else { "├── " };
        let child_prefix = if is_last { "    " } else { "│   " };

        output.push_str(&format!("{}{}{}\n", prefix, connector, node.label));
        render_children(&node.children, output, &format!("{}{}", prefix, child_prefix));
    }
}

/// One-line totals for the organized library
pub fn render_counts(authors: &[AuthorGroup]) -> String {
    let series: usize = authors.iter().map(|a| a.series.len()).sum();
    let books: usize = authors.iter().map(|a| a.book_count()).sum();
    format!(
        "{} author(s), {} series, {} book(s)",
        authors.len(),
        series,
        books
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::organize::organize;
    use crate::organize::tests::book;

    #[test]
    fn test_render_tree() {
        let books = vec![
            book("Author A", "Book Two", Some(("Saga", Some("2")))),
            book("Author A", "Book One", Some(("Saga", Some("1")))),
            book("Author A", "Standalone", None),
            book("Author B", "Other", None),
        ];
        let authors = organize(&books);

        let tree = render_tree(&authors);

        let expected = "\
Author A/
├── Saga/
│   ├── #1 Book One
│   └── #2 Book Two
└── Standalone
Author B/
└── Other
";
        assert_eq!(tree, expected);
    }

    #[test]
    fn test_render_tree_series_without_sequence() {
        let books = vec![book("A", "Loose", Some(("S", None)))];
        let authors = organize(&books);

        let tree = render_tree(&authors);
        assert!(tree.contains("└── S/\n    └── Loose\n"));
    }

    #[test]
    fn test_render_empty() {
        assert_eq!(render_tree(&[]), "");
        assert_eq!(render_counts(&[]), "0 author(s), 0 series, 0 book(s)");
    }

    #[test]
    fn test_render_counts() {
        let books = vec![
            book("A", "One", Some(("S", Some("1")))),
            book("A", "Two", None),
            book("B", "Three", None),
        ];
        let authors = organize(&books);
        assert_eq!(render_counts(&authors), "2 author(s), 1 series, 3 book(s)");
    }
}
