//! Built-in widgets: Alert, Button, Card, ClassNamed.

pub mod alert;
pub mod button;
pub mod card;
pub mod classnamed;

pub use alert::Alert;
pub use button::Button;
pub use card::Card;
pub use classnamed::ClassNamed;
