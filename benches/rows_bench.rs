use criterion::{black_box, criterion_group, criterion_main, Criterion};
use setlist::app::rows;
use setlist::library::{Album, ArtistGroup, PlaylistSongs, Song};

fn large_playlist() -> PlaylistSongs {
    let mut track = 0;
    let artists = (0..50)
        .map(|a| ArtistGroup {
            artist: format!("Artist {}", a),
            albums: (0..4)
                .map(|b| Album {
                    key: format!("{}-{}", a, b),
                    name: format!("Album {}", b),
                    year: Some("1999".to_string()),
                    cover_art: None,
                    songs: (0..12)
                        .map(|n| {
                            track += 1;
                            Song::new(n + 1, "Some Song", track)
                        })
                        .collect(),
                })
                .collect(),
        })
        .collect();
    PlaylistSongs::from_artists(artists)
}

fn bench_rows(c: &mut Criterion) {
    let songs = large_playlist();
    c.bench_function("flatten_2400_tracks", |b| b.iter(|| rows(black_box(&songs)).len()));
    c.bench_function("parse_library_json", |b| {
        let json = r#"{ "A": { "x": { "name": "X", "year": 2000, "songs": {
            "0": {"n": 1, "t": "One", "i": 0}, "1": {"n": 2, "t": "Two", "i": 1} } } } }"#;
        b.iter(|| serde_json::from_str::<PlaylistSongs>(black_box(json)).map(|s| s.song_count()))
    });
}

criterion_group!(benches, bench_rows);
criterion_main!(benches);
