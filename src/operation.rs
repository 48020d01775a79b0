//! Textual editing steps.
//!
//! ```text
//! rotate=DEGREES
//! downsample=HEIGHT_SCALE,WIDTH_SCALE
//! patch=ROW,COLUMN,R,G,B,PATH
//! ```
//!
//! The patch path is everything after the fifth comma, so it may itself
//! contain commas.

use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

use log::info;

use crate::editor::ImageEditor;
use crate::error::{Error, Result};
use crate::store::ImageStore;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Operation {
    Rotate {
        degrees: i32,
    },
    DownSample {
        height_scale: i32,
        width_scale: i32,
    },
    Patch {
        start_row: i32,
        start_column: i32,
        transparent: [u8; 3],
        path: PathBuf,
    },
}

impl Operation {
    /// Runs the step against `editor`. Patch grids are loaded through `store`.
    ///
    /// With `strict` set, parameters that would otherwise be ignored are errors.
    pub fn apply<S: ImageStore + ?Sized>(
        &self,
        editor: &mut ImageEditor,
        store: &S,
        strict: bool,
    ) -> Result<()> {
        match self {
            Operation::Rotate { degrees } => {
                if strict {
                    editor.try_rotate(*degrees)?;
                } else {
                    editor.rotate(*degrees);
                }
            }
            Operation::DownSample {
                height_scale,
                width_scale,
            } => {
                if strict {
                    editor.try_down_sample(*height_scale, *width_scale)?;
                } else {
                    editor.down_sample(*height_scale, *width_scale);
                }
            }
            Operation::Patch {
                start_row,
                start_column,
                transparent: [r, g, b],
                path,
            } => {
                let patch = store.load(path)?;
                let written = if strict {
                    editor.try_patch(*start_row, *start_column, &patch, *r, *g, *b)?
                } else {
                    editor.patch(*start_row, *start_column, &patch, *r, *g, *b)
                };
                info!("patched {written} pixels from {}", path.display());
            }
        }
        Ok(())
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Operation::Rotate { degrees } => write!(f, "rotate={degrees}"),
            Operation::DownSample {
                height_scale,
                width_scale,
            } => write!(f, "downsample={height_scale},{width_scale}"),
            Operation::Patch {
                start_row,
                start_column,
                transparent: [r, g, b],
                path,
            } => write!(
                f,
                "patch={start_row},{start_column},{r},{g},{b},{}",
                path.display()
            ),
        }
    }
}

impl FromStr for Operation {
    type Err = Error;

    fn from_str(input: &str) -> Result<Self> {
        let invalid = |reason: &str| Error::InvalidOperation {
            input: input.to_string(),
            reason: reason.to_string(),
        };
        let (name, args) = input
            .split_once('=')
            .ok_or_else(|| invalid("expected NAME=ARGS"))?;

        match name.trim() {
            "rotate" => {
                let degrees = parse_field(input, args, "degrees")?;
                Ok(Operation::Rotate { degrees })
            }
            "downsample" => {
                let (hs, ws) = args
                    .split_once(',')
                    .ok_or_else(|| invalid("expected HEIGHT_SCALE,WIDTH_SCALE"))?;
                Ok(Operation::DownSample {
                    height_scale: parse_field(input, hs, "height scale")?,
                    width_scale: parse_field(input, ws, "width scale")?,
                })
            }
            "patch" => {
                let fields: Vec<&str> = args.splitn(6, ',').collect();
                let [row, col, r, g, b, path] = fields.as_slice() else {
                    return Err(invalid("expected ROW,COLUMN,R,G,B,PATH"));
                };
                if path.is_empty() {
                    return Err(invalid("missing patch path"));
                }
                Ok(Operation::Patch {
                    start_row: parse_field(input, row, "row")?,
                    start_column: parse_field(input, col, "column")?,
                    transparent: [
                        parse_field(input, r, "red")?,
                        parse_field(input, g, "green")?,
                        parse_field(input, b, "blue")?,
                    ],
                    path: PathBuf::from(*path),
                })
            }
            other => Err(invalid(&format!("unknown operation `{other}`"))),
        }
    }
}

fn parse_field<T>(input: &str, value: &str, what: &str) -> Result<T>
where
    T: FromStr,
    T::Err: fmt::Display,
{
    value
        .trim()
        .parse()
        .map_err(|e| Error::InvalidOperation {
            input: input.to_string(),
            reason: format!("bad {what} `{}`: {e}", value.trim()),
        })
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::collections::HashMap;
    use std::path::Path;

    use super::*;
    use crate::grid::Grid;
    use crate::pixel::Pixel;

    #[derive(Default)]
    struct MapStore {
        grids: RefCell<HashMap<PathBuf, Grid>>,
    }

    impl ImageStore for MapStore {
        fn load(&self, path: &Path) -> Result<Grid> {
            self.grids
                .borrow()
                .get(path)
                .cloned()
                .ok_or_else(|| Error::Io {
                    path: path.to_path_buf(),
                    source: std::io::Error::from(std::io::ErrorKind::NotFound),
                })
        }

        fn save(&self, grid: &Grid, path: &Path) -> Result<()> {
            self.grids.borrow_mut().insert(path.to_path_buf(), grid.clone());
            Ok(())
        }
    }

    #[test]
    fn test_parse_operations() {
        assert_eq!(
            "rotate=270".parse::<Operation>().expect("valid"),
            Operation::Rotate { degrees: 270 }
        );
        assert_eq!(
            "downsample= 4, 2".parse::<Operation>().expect("valid"),
            Operation::DownSample {
                height_scale: 4,
                width_scale: 2
            }
        );
        assert_eq!(
            "patch=3,-1,0,255,0,dir/a,b.png"
                .parse::<Operation>()
                .expect("valid"),
            Operation::Patch {
                start_row: 3,
                start_column: -1,
                transparent: [0, 255, 0],
                path: PathBuf::from("dir/a,b.png"),
            }
        );
    }

    #[test]
    fn test_parse_rejects_malformed() {
        for input in [
            "rotate",
            "rotate=ninety",
            "downsample=2",
            "patch=0,0,0,0,0",
            "patch=0,0,0,0,0,",
            "patch=0,0,256,0,0,a.png",
            "flip=1",
        ] {
            assert!(
                matches!(input.parse::<Operation>(), Err(Error::InvalidOperation { .. })),
                "{input}"
            );
        }
    }

    #[test]
    fn test_display_parses_back() {
        for input in ["rotate=-90", "downsample=2,3", "patch=1,2,3,4,5,p.png"] {
            let op: Operation = input.parse().expect("valid");
            assert_eq!(op.to_string(), input);
        }
    }

    #[test]
    fn test_apply_patch_loads_through_store() {
        let store = MapStore::default();
        store
            .save(&Grid::filled(1, 1, Pixel::WHITE), Path::new("dot"))
            .expect("in memory");
        let mut editor = ImageEditor::new(Grid::new(2, 2));

        let op: Operation = "patch=1,1,0,0,0,dot".parse().expect("valid");
        op.apply(&mut editor, &store, true).expect("fits");
        assert_eq!(editor.grid().pixel(1, 1), Pixel::WHITE);

        let op: Operation = "patch=2,2,0,0,0,dot".parse().expect("valid");
        op.apply(&mut editor, &store, false).expect("lenient");
        assert!(op.apply(&mut editor, &store, true).is_err());

        let missing: Operation = "patch=0,0,0,0,0,nope".parse().expect("valid");
        assert!(matches!(
            missing.apply(&mut editor, &store, false),
            Err(Error::Io { .. })
        ));
    }

    #[test]
    fn test_apply_strict_rotate() {
        let store = MapStore::default();
        let mut editor = ImageEditor::new(Grid::new(3, 1));
        let op = Operation::Rotate { degrees: 30 };
        op.apply(&mut editor, &store, false).expect("lenient");
        assert!(op.apply(&mut editor, &store, true).is_err());
        Operation::Rotate { degrees: 90 }
            .apply(&mut editor, &store, true)
            .expect("valid");
        assert_eq!((editor.grid().width(), editor.grid().height()), (1, 3));
    }
}
