pub mod session_delegate;
