use serde::{Deserialize, Serialize};

/// Identity of anyone who can owe or be owed money on a list.
///
/// A `Friend` is a contact owned by a registered user, not a login
/// principal; ownership checks live outside this crate. Both variants are
/// plain `(kind, id)` pairs with value equality so they can key balance
/// maps, and the derived ordering doubles as the deterministic tie-break
/// when settlement amounts are equal.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(tag = "kind", content = "id", rename_all = "snake_case")]
pub enum Participant {
    User(i64),
    Friend(i64),
}
