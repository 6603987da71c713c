mod helpers;
mod login;
mod session_expiry;
