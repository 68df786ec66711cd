pub mod chain;
pub mod count;
pub mod error;
pub mod hash;
pub mod table;

pub use chain::Chain;
pub use count::{count_words, top_words, top_words_in_file, words};
pub use error::{Error, Result};
pub use hash::{char_sum_hash, weighted_sum_hash, HashFn};
pub use table::{ChainedTable, ChainedTableBuilder};
