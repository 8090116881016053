pub(crate) mod post_repository;

use crate::database::DatabaseExecutor;

/// Storage accessor scoped to a single request.
pub struct Repository {
	pub(crate) executor: DatabaseExecutor,
}

impl Repository {
	pub fn new(executor: DatabaseExecutor) -> Self {
		Self { executor }
	}
}
