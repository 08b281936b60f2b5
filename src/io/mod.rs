/*!
# IO

Reading and writing online coloring instances.

The only supported format is an **edge list** with a Pace-style header
`p col {n} {m}`, followed by `m` lines `u v` (1-based endpoints). The reveal
order and the planted classes travel in two dedicated comment lines, so a
written instance can be reconstructed in full:

```text
p col 4 3
c order 1 2 3 4
c classes 1 2 1 2
1 2
2 3
3 4
```

All other lines starting with `c` are treated as free-form comments and
skipped. Errors are plain [`std::io::Error`]s.
*/

pub mod edge_list;
pub mod header;

use std::io::{ErrorKind, Result};

use crate::prelude::*;

pub use edge_list::*;
pub use header::*;

/// Shorthand for creating a new IO-error
macro_rules! io_error {
    ($kind: expr, $info: expr) => {
        std::io::Error::new($kind, $info)
    };
}

/// Shorthand for returning `Err(std::io::Error)` early when a condition fails
macro_rules! raise_error_unless {
    ($cond : expr, $kind : expr, $info : expr) => {
        if !($cond) {
            return Err(io_error!($kind, $info));
        }
    };
}

/// Tries to parse the next value in an iterator and returns early if it fails
macro_rules! parse_next_value {
    ($iterator : expr, $name : expr) => {{
        let next = $iterator.next();
        raise_error_unless!(
            next.is_some(),
            ErrorKind::InvalidData,
            format!("Premature end of line when parsing {}.", $name)
        );

        let parsed = next.unwrap().parse();
        raise_error_unless!(
            parsed.is_ok(),
            ErrorKind::InvalidData,
            format!("Invalid value found. Cannot parse {}.", $name)
        );

        parsed.unwrap()
    }};
}

use io_error;
use parse_next_value;
use raise_error_unless;

/// Parses a whitespace-separated list of 1-based values into 0-based ones
fn parse_value_list(line: &str, name: &str) -> Result<Vec<u32>> {
    let mut values = Vec::new();
    for token in line.split(' ').filter(|t| !t.is_empty()) {
        let parsed: u32 = match token.parse() {
            Ok(x) => x,
            Err(_) => {
                return Err(io_error!(
                    ErrorKind::InvalidData,
                    format!("Invalid value found. Cannot parse {name}.")
                ))
            }
        };
        raise_error_unless!(
            parsed > 0,
            ErrorKind::InvalidData,
            format!("Values of {name} must be 1-based.")
        );
        values.push(parsed - 1);
    }
    Ok(values)
}
