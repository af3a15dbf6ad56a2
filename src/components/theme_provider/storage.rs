//! Persistence of the chosen theme mode.

use log::warn;
use web_sys::Storage;

use super::error::ThemeError;
use super::mode::ThemeMode;

/// Local storage key holding `"light"` or `"dark"`.
pub const THEME_STORAGE_KEY: &str = "fedf_theme";

/// Somewhere a single theme preference can be kept.
pub trait PreferenceStore {
	/// Read the stored mode, `Ok(None)` if nothing was stored yet.
	fn load(&self) -> Result<Option<ThemeMode>, ThemeError>;
	/// Overwrite the stored mode.
	fn save(&self, mode: ThemeMode) -> Result<(), ThemeError>;
}

/// The browser's `window.localStorage`.
#[derive(Clone, Copy, Debug)]
pub struct LocalStore {
	key: &'static str,
}

impl Default for LocalStore {
	fn default() -> Self {
		Self::new(THEME_STORAGE_KEY)
	}
}

impl LocalStore {
	pub const fn new(key: &'static str) -> Self {
		Self { key }
	}

	fn storage() -> Result<Storage, ThemeError> {
		web_sys::window()
			.ok_or(ThemeError::StorageUnavailable)?
			.local_storage()
			.map_err(|e| ThemeError::Storage(format!("{e:?}")))?
			.ok_or(ThemeError::StorageUnavailable)
	}
}

impl PreferenceStore for LocalStore {
	fn load(&self) -> Result<Option<ThemeMode>, ThemeError> {
		let value = Self::storage()?
			.get_item(self.key)
			.map_err(|e| ThemeError::Storage(format!("{e:?}")))?;
		value.map(|v| v.parse()).transpose()
	}

	fn save(&self, mode: ThemeMode) -> Result<(), ThemeError> {
		Self::storage()?
			.set_item(self.key, mode.as_str())
			.map_err(|e| ThemeError::Storage(format!("{e:?}")))
	}
}

/// Load the stored mode, falling back to the default when nothing usable is
/// stored.
pub fn load_mode(store: &impl PreferenceStore) -> ThemeMode {
	match store.load() {
		Ok(Some(mode)) => mode,
		Ok(None) => ThemeMode::default(),
		Err(e) => {
			warn!("fedf-backdrop: ignoring stored theme: {e}");
			ThemeMode::default()
		}
	}
}

/// Save the mode, logging instead of failing.
pub fn save_mode(store: &impl PreferenceStore, mode: ThemeMode) {
	if let Err(e) = store.save(mode) {
		warn!("fedf-backdrop: could not persist theme: {e}");
	}
}


#[cfg(test)]
mod tests {
	use super::memory::MemoryStore;
	use super::*;

	#[test]
	fn test_empty_store_defaults_to_dark() {
		assert_eq!(load_mode(&MemoryStore::default()), ThemeMode::Dark);
	}

	#[test]
	fn test_stored_value_is_used() {
		assert_eq!(load_mode(&MemoryStore::with_value("light")), ThemeMode::Light);
		assert_eq!(load_mode(&MemoryStore::with_value("dark")), ThemeMode::Dark);
	}

	#[test]
	fn test_invalid_value_falls_back() {
		let store = MemoryStore::with_value("solarized");
		assert_eq!(
			store.load(),
			Err(ThemeError::InvalidMode("solarized".into()))
		);
		assert_eq!(load_mode(&store), ThemeMode::Dark);
	}

	#[test]
	fn test_save_then_load() {
		let store = MemoryStore::default();
		save_mode(&store, ThemeMode::Light);
		assert_eq!(store.value.borrow().as_deref(), Some("light"));
		assert_eq!(load_mode(&store), ThemeMode::Light);

		save_mode(&store, ThemeMode::Light.toggled());
		assert_eq!(load_mode(&store), ThemeMode::Dark);
	}

	#[test]
	fn test_failed_save_is_swallowed() {
		let store = MemoryStore {
			fail_writes: true,
			..MemoryStore::with_value("light")
		};
		save_mode(&store, ThemeMode::Dark);
		assert_eq!(load_mode(&store), ThemeMode::Light);
	}
}
