mod errors;
mod logging;
mod recovery;
mod splitter_selectors;
