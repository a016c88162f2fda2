pub mod register_user_usecase;

#[cfg(test)]
pub mod mock;
