pub mod run;

use crate::types::{Credentials, Registration};

#[derive(Debug)]
pub enum Action {
    Login { credentials: Credentials },
    Register { registration: Registration },
    Logout,
    Whoami,
}
