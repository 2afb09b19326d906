use std::fmt;

/// Matrice de caractères produite par la conversion, row-major.
///
/// `rows()[y][x]` holds the cell generated from source pixel `(x, y)`
/// (relative to the source's top-left corner). Grids coming out of the
/// forward transform are always rectangular; grids parsed from text are not
/// checked.
///
/// # Example
/// ```
/// use asciify_core::grid::AsciiArt;
/// let art = AsciiArt::from_text("AB\nCA\n");
/// assert_eq!(art.width(), 2);
/// assert_eq!(art.height(), 2);
/// assert_eq!(art.get(1, 1), Some("A"));
/// assert_eq!(art.to_string(), "AB\nCA\n");
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AsciiArt {
    rows: Vec<Vec<String>>,
}

impl AsciiArt {
    /// Wrap existing rows.
    #[must_use]
    pub fn new(rows: Vec<Vec<String>>) -> Self {
        Self { rows }
    }

    /// A grid with no rows.
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// Length of the first row, or 0 when there are no rows.
    #[must_use]
    pub fn width(&self) -> usize {
        self.rows.first().map_or(0, Vec::len)
    }

    /// Number of rows.
    #[must_use]
    pub fn height(&self) -> usize {
        self.rows.len()
    }

    /// `true` when the grid has no rows.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Cell at column `x`, row `y`.
    #[inline]
    #[must_use]
    pub fn get(&self, x: usize, y: usize) -> Option<&str> {
        self.rows.get(y)?.get(x).map(String::as_str)
    }

    /// Borrow the rows.
    #[must_use]
    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }

    /// Take the rows out.
    #[must_use]
    pub fn into_rows(self) -> Vec<Vec<String>> {
        self.rows
    }

    /// `true` if every row has the width of the first one.
    ///
    /// # Example
    /// ```
    /// use asciify_core::grid::AsciiArt;
    /// assert!(AsciiArt::from_text("ab\ncd\n").is_rectangular());
    /// assert!(!AsciiArt::from_text("ab\nc\n").is_rectangular());
    /// ```
    #[must_use]
    pub fn is_rectangular(&self) -> bool {
        let width = self.width();
        self.rows.iter().all(|row| row.len() == width)
    }

    /// Flatten into text: cells concatenated, each row followed by `\n`.
    ///
    /// Same output as the `Display` impl.
    #[must_use]
    pub fn to_text(&self) -> String {
        self.to_string()
    }

    /// Parse text produced by [`to_text`](Self::to_text).
    ///
    /// The empty string gives an empty grid. Otherwise one trailing `\n` is
    /// dropped, the rest is split on `\n`, and every line becomes one cell
    /// per `char`. Multi-character palette entries therefore do not survive
    /// a text round trip.
    ///
    /// # Example
    /// ```
    /// use asciify_core::grid::AsciiArt;
    /// let art = AsciiArt::from_text("$@\n. \n");
    /// assert_eq!(art.rows()[1], vec![".".to_string(), " ".to_string()]);
    /// assert!(AsciiArt::from_text("").is_empty());
    /// ```
    #[must_use]
    pub fn from_text(text: &str) -> Self {
        if text.is_empty() {
            return Self::empty();
        }
        let body = text.strip_suffix('\n').unwrap_or(text);
        let rows = body
            .split('\n')
            .map(|line| line.chars().map(String::from).collect())
            .collect();
        Self { rows }
    }
}

impl fmt::Display for AsciiArt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in &self.rows {
            for cell in row {
                f.write_str(cell)?;
            }
            f.write_str("\n")?;
        }
        Ok(())
    }
}

impl From<Vec<Vec<String>>> for AsciiArt {
    fn from(rows: Vec<Vec<String>>) -> Self {
        Self::new(rows)
    }
}
