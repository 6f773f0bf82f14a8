use serde::de::{self, Deserializer, MapAccess, Visitor};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;
use std::marker::PhantomData;

pub mod source;

pub use source::{LibraryError, LibrarySource};

/// A saved playlist. Identity is the `id`, never the title.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Playlist {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub item_count: u32,
}

impl Playlist {
    pub fn new(id: &str, title: &str, item_count: u32) -> Self {
        Self {
            id: id.to_string(),
            title: title.to_string(),
            item_count,
        }
    }
}

/// Track index currently bound to playback, relative to the player's playlist.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CurrentSong {
    pub track: usize,
}

/// One row of an album: display number, title and the index used to start playback.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(try_from = "Value")]
pub struct Song {
    pub number: String,
    pub name: String,
    pub track: usize,
}

impl Song {
    pub fn new(number: u32, name: &str, track: usize) -> Self {
        Self {
            number: number.to_string(),
            name: name.to_string(),
            track,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Album {
    pub key: String,
    pub name: String,
    pub year: Option<String>,
    pub cover_art: Option<String>,
    pub songs: Vec<Song>,
}

impl Album {
    /// "Name (Year)", or just the name when the year is unknown.
    pub fn display_title(&self) -> String {
        match &self.year {
            Some(year) => format!("{} ({})", self.name, year),
            None => self.name.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArtistGroup {
    pub artist: String,
    pub albums: Vec<Album>,
}

/// Songs of one playlist, grouped artist → album in source order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PlaylistSongs {
    artists: Vec<ArtistGroup>,
}

impl PlaylistSongs {
    pub fn from_artists(artists: Vec<ArtistGroup>) -> Self {
        Self { artists }
    }

    pub fn artists(&self) -> &[ArtistGroup] {
        &self.artists
    }

    /// Structural emptiness: no artist keys at all.
    pub fn is_empty(&self) -> bool {
        self.artists.is_empty()
    }

    pub fn songs(&self) -> impl Iterator<Item = &Song> {
        self.artists
            .iter()
            .flat_map(|a| a.albums.iter())
            .flat_map(|album| album.songs.iter())
    }

    pub fn song_count(&self) -> usize {
        self.songs().count()
    }

    pub fn albums(&self) -> impl Iterator<Item = &Album> {
        self.artists.iter().flat_map(|a| a.albums.iter())
    }
}

impl<'de> Deserialize<'de> for PlaylistSongs {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let entries = OrderedEntries::<OrderedEntries<RawAlbum>>::deserialize(deserializer)?;
        let artists = entries
            .0
            .into_iter()
            .map(|(artist, albums)| ArtistGroup {
                artist,
                albums: albums
                    .0
                    .into_iter()
                    .map(|(key, raw)| raw.into_album(key))
                    .collect(),
            })
            .collect();
        Ok(Self { artists })
    }
}

/// JSON object read as a list of entries, keeping the key order of the file.
struct OrderedEntries<V>(Vec<(String, V)>);

impl<'de, V: Deserialize<'de>> Deserialize<'de> for OrderedEntries<V> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct EntriesVisitor<V>(PhantomData<V>);

        impl<'de, V: Deserialize<'de>> Visitor<'de> for EntriesVisitor<V> {
            type Value = OrderedEntries<V>;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("a map")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Self::Value, A::Error> {
                let mut entries = Vec::with_capacity(map.size_hint().unwrap_or(0));
                while let Some((key, value)) = map.next_entry::<String, V>()? {
                    entries.push((key, value));
                }
                Ok(OrderedEntries(entries))
            }

            // Libraries exported from an empty playlist sometimes carry `[]`.
            fn visit_seq<A: de::SeqAccess<'de>>(self, mut seq: A) -> Result<Self::Value, A::Error> {
                if seq.next_element::<de::IgnoredAny>()?.is_some() {
                    return Err(de::Error::invalid_type(de::Unexpected::Seq, &self));
                }
                Ok(OrderedEntries(Vec::new()))
            }
        }

        deserializer.deserialize_any(EntriesVisitor(PhantomData))
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawAlbum {
    #[serde(default)]
    name: String,
    #[serde(default)]
    year: Option<Scalar>,
    #[serde(default)]
    cover_art: Option<RawCoverArt>,
    #[serde(default)]
    songs: SongList,
}

impl RawAlbum {
    fn into_album(self, key: String) -> Album {
        Album {
            key,
            name: self.name,
            year: self.year.map(Scalar::into_string).filter(|y| !y.is_empty()),
            cover_art: self.cover_art.and_then(RawCoverArt::into_uri),
            songs: self.songs.0,
        }
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum Scalar {
    Int(u64),
    Text(String),
}

impl Scalar {
    fn into_string(self) -> String {
        match self {
            Scalar::Int(n) => n.to_string(),
            Scalar::Text(s) => s,
        }
    }
}

/// Cover art is either a plain URI or the legacy `{ "_j": uri }` wrapper.
#[derive(Deserialize)]
#[serde(untagged)]
enum RawCoverArt {
    Uri(String),
    Wrapped {
        #[serde(rename = "_j")]
        j: Option<String>,
    },
}

impl RawCoverArt {
    fn into_uri(self) -> Option<String> {
        let uri = match self {
            RawCoverArt::Uri(uri) => uri,
            RawCoverArt::Wrapped { j } => j?,
        };
        let uri = uri.trim();
        (!uri.is_empty()).then(|| uri.to_string())
    }
}

/// Album songs, stored either as an array or as an object whose values are read in order.
#[derive(Default)]
struct SongList(Vec<Song>);

impl<'de> Deserialize<'de> for SongList {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let values = match Value::deserialize(deserializer)? {
            Value::Array(items) => items,
            Value::Object(map) => map.into_iter().map(|(_, v)| v).collect(),
            Value::Null => Vec::new(),
            other => {
                return Err(de::Error::custom(format!(
                    "expected song list, found {}",
                    other
                )))
            }
        };
        values
            .into_iter()
            .enumerate()
            .map(|(i, v)| Song::try_from(v).map_err(|e| de::Error::custom(format!("song #{}: {}", i, e))))
            .collect::<Result<Vec<_>, _>>()
            .map(SongList)
    }
}

impl TryFrom<Value> for Song {
    type Error = String;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        let (number, name, track) = match value {
            Value::Object(mut map)
                if map.contains_key("name") && map.contains_key("track") =>
            {
                let number = map.remove("number").unwrap_or(Value::Null);
                let name = map.remove("name").unwrap_or(Value::Null);
                let track = map.remove("track").unwrap_or(Value::Null);
                (number, name, track)
            }
            Value::Object(map) => positional(map.into_iter().map(|(_, v)| v).collect())?,
            Value::Array(items) => positional(items)?,
            other => return Err(format!("expected song entry, found {}", other)),
        };

        Ok(Song {
            number: display_scalar(&number),
            name: display_scalar(&name),
            track: track_index(&track)?,
        })
    }
}

fn positional(values: Vec<Value>) -> Result<(Value, Value, Value), String> {
    let mut it = values.into_iter();
    match (it.next(), it.next(), it.next()) {
        (Some(number), Some(name), Some(track)) => Ok((number, name, track)),
        _ => Err("expected [number, name, track]".to_string()),
    }
}

fn display_scalar(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Null => String::new(),
        other => other.to_string(),
    }
}

fn track_index(value: &Value) -> Result<usize, String> {
    match value {
        Value::Number(n) => n
            .as_u64()
            .map(|n| n as usize)
            .ok_or_else(|| format!("track index {} is not a non-negative integer", n)),
        Value::String(s) => s
            .trim()
            .parse()
            .map_err(|_| format!("track index {:?} is not a number", s)),
        other => Err(format!("expected track index, found {}", other)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_object_songs_keep_source_order() {
        let json = r#"{
            "Zeta": { "b-side": { "name": "Later", "year": 2001, "songs": {
                "0": { "n": 1, "t": "One", "i": 4 },
                "1": { "n": 2, "t": "Two", "i": 5 } } } },
            "Alpha": { "a": { "name": "First", "year": "1999", "songs": [[1, "Intro", 0]] } }
        }"#;
        let songs: PlaylistSongs = serde_json::from_str(json).unwrap();

        let artists: Vec<&str> = songs.artists().iter().map(|a| a.artist.as_str()).collect();
        assert_eq!(artists, vec!["Zeta", "Alpha"]);

        let zeta = &songs.artists()[0].albums[0];
        assert_eq!(zeta.display_title(), "Later (2001)");
        assert_eq!(zeta.songs[1], Song::new(2, "Two", 5));
        assert_eq!(songs.song_count(), 3);
    }

    #[test]
    fn test_named_song_fields() {
        let song = Song::try_from(serde_json::json!({"track": 7, "name": "Seven", "number": "07"}))
            .unwrap();
        assert_eq!(song.number, "07");
        assert_eq!(song.track, 7);
    }

    #[test]
    fn test_bad_track_index_is_rejected() {
        let err = Song::try_from(serde_json::json!([1, "Broken", -3])).unwrap_err();
        assert!(err.contains("track index"));
    }

    #[test]
    fn test_cover_art_shapes() {
        let json = r#"{ "A": {
            "plain": { "name": "p", "coverArt": "http://covers/p.jpg", "songs": [] },
            "wrapped": { "name": "w", "coverArt": { "_j": "/tmp/w.png" }, "songs": [] },
            "pending": { "name": "x", "coverArt": { "_j": null }, "songs": [] },
            "blank": { "name": "b", "coverArt": "", "songs": [] }
        } }"#;
        let songs: PlaylistSongs = serde_json::from_str(json).unwrap();
        let covers: Vec<Option<&str>> = songs.albums().map(|a| a.cover_art.as_deref()).collect();
        assert_eq!(
            covers,
            vec![Some("http://covers/p.jpg"), Some("/tmp/w.png"), None, None]
        );
    }

    #[test]
    fn test_empty_shapes_are_structurally_empty() {
        let from_object: PlaylistSongs = serde_json::from_str("{}").unwrap();
        let from_array: PlaylistSongs = serde_json::from_str("[]").unwrap();
        assert!(from_object.is_empty());
        assert!(from_array.is_empty());
        assert!(PlaylistSongs::default().is_empty());
    }

    #[test]
    fn test_album_without_year() {
        let songs: PlaylistSongs =
            serde_json::from_str(r#"{ "A": { "k": { "name": "Untitled", "songs": [] } } }"#).unwrap();
        assert_eq!(songs.artists()[0].albums[0].display_title(), "Untitled");
        // An artist with an album but no songs is still an entry.
        assert!(!songs.is_empty());
    }
}
