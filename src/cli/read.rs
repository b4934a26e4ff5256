use std::{
    io::{BufRead, BufReader},
    path::{Path, PathBuf},
};

use dpll_sat::{builder::ParserInfo, context::Context, types::err::ErrorKind};

pub enum ReadError {
    FailedToOpen(PathBuf),
    ParseError(String, ErrorKind),
    #[cfg(not(feature = "xz"))]
    UnsupportedExtension(PathBuf),
}

impl std::fmt::Display for ReadError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self {
            Self::FailedToOpen(path) => write!(f, "Failed to open CNF file {path:?}."),
            Self::ParseError(source, err) => write!(f, "Parse error in {source}: {err}."),
            #[cfg(not(feature = "xz"))]
            Self::UnsupportedExtension(path) => {
                write!(f, "Unable to read {path:?}, xz support requires the 'xz' feature.")
            }
        }
    }
}

/// Reads the DIMACS formula at `path`, or on standard input if there is no path, to `context`.
pub fn read_dimacs(path: Option<&Path>, context: &mut Context) -> Result<ParserInfo, ReadError> {
    let Some(path) = path else {
        log::info!("Reading DIMACS from standard input");
        let stdin = std::io::stdin();
        return read_with(stdin.lock(), "standard input", context);
    };

    log::info!("Reading DIMACS file from {path:?}");

    let file = match std::fs::File::open(path) {
        Ok(file) => file,
        Err(_) => return Err(ReadError::FailedToOpen(path.to_owned())),
    };

    let source = path.display().to_string();

    match path.extension() {
        #[cfg(feature = "xz")]
        Some(extension) if extension == "xz" => read_with(
            BufReader::new(xz2::read::XzDecoder::new(&file)),
            &source,
            context,
        ),

        #[cfg(not(feature = "xz"))]
        Some(extension) if extension == "xz" => {
            Err(ReadError::UnsupportedExtension(path.to_owned()))
        }

        _ => read_with(BufReader::new(&file), &source, context),
    }
}

fn read_with(reader: impl BufRead, source: &str, context: &mut Context) -> Result<ParserInfo, ReadError> {
    context
        .read_dimacs(reader)
        .map_err(|e| ReadError::ParseError(source.to_owned(), e))
}

/// Writes the details of a parse, as comments.
pub fn examine_parser_info(info: &ParserInfo) {
    match info.expected_atoms {
        Some(count) => println!("c Expected atoms:   {count}"),
        None => println!("c No preamble was found."),
    }

    println!("c Atom count:       {}", info.added_atoms);

    if let Some(count) = info.expected_clauses {
        println!("c Expected clauses: {count}")
    }

    println!("c Clause count:     {}", info.added_clauses);
}
