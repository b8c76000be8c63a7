pub mod use_cases;

pub use use_cases::{
    add_favorite::AddFavoriteUseCase,
    catalog::CatalogUseCase,
    delete_account::DeleteAccountUseCase,
    get_account::GetAccountUseCase,
    list_accounts::ListAccountsUseCase,
    login::{LoginError, LoginUseCase},
    register::{RegisterError, RegisterUseCase},
    remove_favorite::RemoveFavoriteUseCase,
    update_profile::{UpdateProfileError, UpdateProfileUseCase},
};
