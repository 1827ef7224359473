/// Demo library for `tracklist-server seed`
use crate::error::Result;
use tracing::{debug, info};
use tracklist_core::CreateTrack;
use tracklist_storage::{StorageError, TrackStore};

const DEMO_TRACKS: &[(&str, &str, &str, &[&str])] = &[
    ("So What", "Miles Davis", "Kind of Blue", &["Jazz"]),
    ("Blue in Green", "Miles Davis", "Kind of Blue", &["Jazz"]),
    ("Feeling Good", "Nina Simone", "I Put a Spell on You", &["Jazz", "Blues"]),
    ("Paranoid Android", "Radiohead", "OK Computer", &["Rock", "Indie"]),
    ("Teardrop", "Massive Attack", "Mezzanine", &["Electronic"]),
    ("Juicy", "The Notorious B.I.G.", "Ready to Die", &["Hip Hop"]),
    ("Jolene", "Dolly Parton", "Jolene", &["Country"]),
    ("Redemption Song", "Bob Marley & The Wailers", "Uprising", &["Reggae", "Folk"]),
    ("Clair de Lune", "Claude Debussy", "Suite bergamasque", &["Classical"]),
    ("Master of Puppets", "Metallica", "Master of Puppets", &["Metal"]),
    ("Superstition", "Stevie Wonder", "Talking Book", &["R&B"]),
    ("Oye Como Va", "Santana", "Abraxas", &["Latin", "Rock"]),
];

/// Create the demo tracks that do not exist yet. Returns how many were added.
pub async fn seed_demo_tracks(store: &TrackStore) -> Result<usize> {
    let mut created = 0;

    for (title, artist, album, genres) in DEMO_TRACKS {
        let data = CreateTrack {
            title: (*title).to_string(),
            artist: (*artist).to_string(),
            album: (*album).to_string(),
            genres: genres.iter().map(|g| (*g).to_string()).collect(),
            cover_image: String::new(),
        };

        match store.create(data).await {
            Ok(_) => created += 1,
            Err(StorageError::Conflict(_)) => debug!(title, "demo track already present"),
            Err(e) => return Err(e.into()),
        }
    }

    info!(created, "seeded demo tracks");
    Ok(created)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn seeding_twice_adds_nothing_new() {
        let temp_dir = tempfile::tempdir().unwrap();
        let store = TrackStore::new(temp_dir.path());
        store.initialize().await.unwrap();

        assert_eq!(seed_demo_tracks(&store).await.unwrap(), DEMO_TRACKS.len());
        assert_eq!(seed_demo_tracks(&store).await.unwrap(), 0);
    }
}
