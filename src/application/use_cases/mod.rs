/// Use cases module containing application business logic orchestration
mod convert_workspace;

pub use convert_workspace::ConvertWorkspaceUseCase;
