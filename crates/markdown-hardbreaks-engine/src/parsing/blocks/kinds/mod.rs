pub mod block_quote;
pub mod frontmatter;

pub use block_quote::BlockQuote;
pub use frontmatter::{Frontmatter, FrontmatterScan};
