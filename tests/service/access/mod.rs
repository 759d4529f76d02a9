mod authorize;
mod cache;
mod resolve;
