pub mod deposit;
pub mod increment_deposit;
pub mod initialize_vault;
pub mod shared;
pub mod update_vault;
pub mod verify_merkle_proof;

pub use deposit::deposit;
pub use increment_deposit::increment_deposit;
pub use initialize_vault::initialize_vault;
pub use update_vault::update_vault;
pub use verify_merkle_proof::verify_merkle_proof;
