pub mod use_cases;

pub use use_cases::{
    AddMemberUseCase, CreateGroupUseCase, FetchMessagesUseCase, LoginForm, LoginResponse,
    LoginUseCase, LogoutUseCase, SignupUseCase,
};
