//! Domain entities - the core business objects.

mod expense;
mod post;
mod query;
mod record;
mod slug;
mod user;

pub use expense::{Amount, Expense, ExpenseTotal, NewExpense, render_fragment};
pub(crate) use post::validate_summary;
pub use post::{LikeOutcome, NewPost, Post, PostPatch, PostStatus, SUMMARY_MAX_LEN};
pub use query::{PostPage, PostQuery, SortField, SortOrder};
pub use record::Record;
pub use slug::slugify;
pub use user::{NewUser, User};
