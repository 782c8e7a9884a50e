//! Cookie consent banner

use tracing::info;

use crate::error::PouparResult;
use crate::storage::client_storage::{COOKIES_ACCEPTED, COOKIES_DECLINED};
use crate::storage::ClientStorage;

pub const MESSAGE: &str = "Utilizamos cookies para melhorar sua experiência. Ao utilizar nosso site, você concorda com nossa política de privacidade em conformidade com o RGPD.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CookieChoice {
    Accepted,
    Declined,
}

/// Stored consent, if any
pub fn stored_choice(storage: &ClientStorage) -> Option<CookieChoice> {
    if storage.contains(COOKIES_ACCEPTED) {
        Some(CookieChoice::Accepted)
    } else if storage.contains(COOKIES_DECLINED) {
        Some(CookieChoice::Declined)
    } else {
        None
    }
}

#[derive(Debug, Clone, Copy)]
pub struct CookieBanner {
    visible: bool,
}

impl CookieBanner {
    /// Visible until either choice has been stored
    pub fn load(storage: &ClientStorage) -> Self {
        Self {
            visible: stored_choice(storage).is_none(),
        }
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn accept(&mut self, storage: &mut ClientStorage) -> PouparResult<()> {
        storage.set(COOKIES_ACCEPTED, "true")?;
        self.visible = false;
        info!("cookies accepted");
        Ok(())
    }

    /// Also used by the close button
    pub fn decline(&mut self, storage: &mut ClientStorage) -> PouparResult<()> {
        storage.set(COOKIES_DECLINED, "true")?;
        self.visible = false;
        info!("cookies declined");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_accept_hides_after_reload() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("client_storage.json");

        let mut storage = ClientStorage::open(path.clone()).unwrap();
        let mut banner = CookieBanner::load(&storage);
        assert!(banner.is_visible());
        banner.accept(&mut storage).unwrap();
        assert!(!banner.is_visible());

        let storage = ClientStorage::open(path).unwrap();
        assert_eq!(storage.get(COOKIES_ACCEPTED), Some("true"));
        assert!(!storage.contains(COOKIES_DECLINED));
        assert!(!CookieBanner::load(&storage).is_visible());
    }

    #[test]
    fn test_decline_writes_distinct_flag() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("client_storage.json");

        let mut storage = ClientStorage::open(path.clone()).unwrap();
        CookieBanner::load(&storage).decline(&mut storage).unwrap();

        let storage = ClientStorage::open(path).unwrap();
        assert_eq!(storage.get(COOKIES_DECLINED), Some("true"));
        assert!(!storage.contains(COOKIES_ACCEPTED));
        assert_eq!(stored_choice(&storage), Some(CookieChoice::Declined));
        assert!(!CookieBanner::load(&storage).is_visible());
    }
}
