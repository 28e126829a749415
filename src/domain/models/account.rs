/// A customer account. `id` is `None` until the store has persisted it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Account {
    pub id: Option<i64>,
    pub name: String,
    pub email: String,
    pub address: String,
    pub phone_number: String,
}

/// The caller-supplied fields of an account, stored verbatim.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccountData {
    pub name: String,
    pub email: String,
    pub address: String,
    pub phone_number: String,
}

impl Account {
    pub fn new(data: AccountData) -> Self {
        Account {
            id: None,
            name: data.name,
            email: data.email,
            address: data.address,
            phone_number: data.phone_number,
        }
    }

    /// Overwrites every mutable field, leaving `id` untouched.
    pub fn apply(&mut self, data: AccountData) {
        self.name = data.name;
        self.email = data.email;
        self.address = data.address;
        self.phone_number = data.phone_number;
    }
}
