use crate::error::Result;
use crate::store::TrackStore;
use tokio::fs;
use tracing::info;

/// Genres written to `genres.json` when the data directory is new
pub const DEFAULT_GENRES: [&str; 14] = [
    "Rock",
    "Pop",
    "Hip Hop",
    "Jazz",
    "Classical",
    "Electronic",
    "R&B",
    "Country",
    "Folk",
    "Reggae",
    "Metal",
    "Blues",
    "Latin",
    "Indie",
];

impl TrackStore {
    /// All known genre names, in file order
    pub async fn genres(&self) -> Result<Vec<String>> {
        let bytes = fs::read(self.genres_file()).await?;
        Ok(serde_json::from_slice(&bytes)?)
    }

    pub(crate) async fn seed_genres(&self) -> Result<()> {
        let path = self.genres_file();
        if fs::try_exists(&path).await? {
            return Ok(());
        }

        let json = serde_json::to_vec_pretty(&DEFAULT_GENRES)?;
        fs::write(&path, json).await?;
        info!(path = %path.display(), "seeded default genres");
        Ok(())
    }
}
