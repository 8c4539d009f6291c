//! Flat-file format for the item set.
//!
//! The file is a header line followed by one comma-separated line per item:
//!
//! ```text
//! ID,Name,Category,Quantity,Price,MinStockLevel
//! 1,Phone,Electronics/Phones,12,199.99,3
//! ```
//!
//! Fields are not quoted or escaped. A name or category containing a comma
//! produces a line that fails to load.

use std::{
    fs::File,
    io::{self, BufRead, BufReader, BufWriter, Write},
    path::Path,
    str::FromStr,
};

use crate::domain::Item;

/// The header line written at the top of every inventory file.
pub const HEADER: &str = "ID,Name,Category,Quantity,Price,MinStockLevel";

/// Reads items from an inventory file.
///
/// A missing file is treated as an empty inventory.
///
/// # Errors
///
/// Returns an error if the file exists but cannot be read, or if any line is
/// malformed. A single bad line fails the whole load.
pub fn load(path: &Path) -> Result<Vec<Item>, LoadError> {
    let file = match File::open(path) {
        Ok(file) => file,
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            tracing::debug!("No inventory file at {}, starting empty", path.display());
            return Ok(Vec::new());
        }
        Err(e) => return Err(e.into()),
    };

    let items = read(&mut BufReader::new(file))?;
    tracing::debug!("Loaded {} items from {}", items.len(), path.display());
    Ok(items)
}

/// Overwrites an inventory file with the given items.
///
/// Items are written in the order given; callers pass them ascending by
/// identifier. The file is truncated and rewritten in place.
///
/// # Errors
///
/// Returns an error if the file cannot be created or written to.
pub fn save<'a>(path: &Path, items: impl IntoIterator<Item = &'a Item>) -> io::Result<()> {
    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);
    write(&mut writer, items)?;
    writer.flush()
}

/// Parses items from a reader.
///
/// The first line is the header and is discarded without inspection. Blank
/// lines are skipped.
///
/// # Errors
///
/// Returns an error if reading fails or a line cannot be parsed.
pub fn read<R: BufRead>(reader: &mut R) -> Result<Vec<Item>, LoadError> {
    let mut items = Vec::new();

    for (index, line) in reader.lines().enumerate().skip(1) {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        let item = parse_line(&line).map_err(|source| LoadError::Parse {
            line: index + 1,
            source,
        })?;
        items.push(item);
    }

    Ok(items)
}

/// Writes the header and one line per item.
///
/// # Errors
///
/// Returns an error if writing fails.
pub fn write<'a, W: Write>(
    writer: &mut W,
    items: impl IntoIterator<Item = &'a Item>,
) -> io::Result<()> {
    writeln!(writer, "{HEADER}")?;
    for item in items {
        writeln!(
            writer,
            "{},{},{},{},{:.2},{}",
            item.id, item.name, item.category, item.quantity, item.price, item.min_stock
        )?;
    }
    Ok(())
}

fn parse_line(line: &str) -> Result<Item, ParseError> {
    let fields: Vec<&str> = line.split(',').collect();
    let [id, name, category, quantity, price, min_stock] = fields[..] else {
        return Err(ParseError::FieldCount(fields.len()));
    };

    let id = parse_field("id", id)?;
    let quantity = parse_field("quantity", quantity)?;
    let price: f64 = parse_field("price", price)?;
    if !price.is_finite() || price < 0.0 {
        return Err(ParseError::InvalidNumber {
            field: "price",
            value: price.to_string(),
        });
    }
    let min_stock = parse_field("minimum stock", min_stock)?;

    Ok(Item {
        id,
        name: name.to_string(),
        category: category.to_string(),
        quantity,
        price,
        min_stock,
    })
}

fn parse_field<T: FromStr>(field: &'static str, value: &str) -> Result<T, ParseError> {
    value
        .trim()
        .parse()
        .map_err(|_| ParseError::InvalidNumber {
            field,
            value: value.to_string(),
        })
}

/// Errors that can occur when loading an inventory file.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    /// The file could not be read.
    #[error("failed to read inventory file")]
    Io(#[from] io::Error),
    /// A line could not be parsed.
    #[error("malformed inventory file at line {line}")]
    Parse {
        /// One-based line number in the file, counting the header.
        line: usize,
        /// What was wrong with the line.
        #[source]
        source: ParseError,
    },
}

/// Problems with a single inventory line.
#[derive(Debug, thiserror::Error, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// The line did not split into exactly six fields.
    #[error("expected 6 fields, found {0}")]
    FieldCount(usize),
    /// A numeric field could not be parsed.
    #[error("invalid {field}: '{value}'")]
    InvalidNumber {
        /// Name of the offending field.
        field: &'static str,
        /// The raw text of the field.
        value: String,
    },
}
