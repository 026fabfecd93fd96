//! Frozen reference tables for tag classification.
//!
//! Everything here is compile-time constant policy data: the genre taxonomy,
//! the keyword rule sets, the non-genre pattern library, the genre families
//! used for context inference, and the synonym-normalization map. Nothing is
//! mutated after construction; the resolver indexes into these tables once
//! and treats them as read-only for the life of the process.

use phf::phf_map;

/// Known tag spelling -> canonical genre name.
///
/// Many spellings may map to one canonical name ("hiphop", "hip hop",
/// "hip-hop" all normalize to "hip-hop"). Declaration order matters: the
/// fuzzy matcher scans this slice front to back and ties on equal scores
/// resolve to the earlier entry.
pub static TAXONOMY: &[(&str, &str)] = &[
    ("rock", "rock"),
    ("pop", "pop"),
    ("hip-hop", "hip-hop"),
    ("hiphop", "hip-hop"),
    ("hip hop", "hip-hop"),
    ("electronic", "electronic"),
    ("jazz", "jazz"),
    ("blues", "blues"),
    ("country", "country"),
    ("classical", "classical"),
    ("reggae", "reggae"),
    ("metal", "metal"),
    ("punk", "punk"),
    ("folk", "folk"),
    ("indie", "indie"),
    ("alternative", "alternative"),
    ("rnb", "rnb"),
    ("soul", "soul"),
    ("funk", "funk"),
    ("house", "house"),
    ("techno", "techno"),
    ("dubstep", "dubstep"),
    ("ambient", "ambient"),
    ("experimental", "experimental"),
    ("trance", "trance"),
    ("drum and bass", "drum and bass"),
    ("dnb", "drum and bass"),
    ("breakbeat", "breakbeat"),
    ("garage", "garage"),
    ("trap", "trap"),
    ("drill", "drill"),
    ("grime", "grime"),
    ("synthwave", "synthwave"),
    ("vaporwave", "vaporwave"),
    ("chillwave", "chillwave"),
    ("darkwave", "darkwave"),
    ("new wave", "new wave"),
    ("post-punk", "post-punk"),
    ("post-rock", "post-rock"),
    ("shoegaze", "shoegaze"),
    ("dream pop", "dream pop"),
    ("britpop", "britpop"),
    ("grunge", "grunge"),
    ("emo", "emo"),
    ("screamo", "screamo"),
    ("hardcore", "hardcore"),
    ("metalcore", "metalcore"),
    ("deathcore", "deathcore"),
    ("black metal", "black metal"),
    ("death metal", "death metal"),
    ("thrash metal", "thrash metal"),
    ("heavy metal", "heavy metal"),
    ("power metal", "power metal"),
    ("progressive metal", "progressive metal"),
    ("doom metal", "doom metal"),
    ("sludge metal", "sludge metal"),
    ("stoner rock", "stoner rock"),
    ("psychedelic rock", "psychedelic rock"),
    ("garage rock", "garage rock"),
    ("surf rock", "surf rock"),
    ("rockabilly", "rockabilly"),
    ("skiffle", "skiffle"),
    ("bebop", "bebop"),
    ("swing", "swing"),
    ("big band", "big band"),
    ("smooth jazz", "smooth jazz"),
    ("fusion", "fusion"),
    ("free jazz", "free jazz"),
    ("cool jazz", "cool jazz"),
    ("hard bop", "hard bop"),
    ("delta blues", "delta blues"),
    ("chicago blues", "chicago blues"),
    ("electric blues", "electric blues"),
    ("rhythm and blues", "rhythm and blues"),
    ("motown", "motown"),
    ("neo-soul", "neo-soul"),
    ("northern soul", "northern soul"),
    ("southern soul", "southern soul"),
    ("gospel", "gospel"),
    ("spiritual", "spiritual"),
    ("bluegrass", "bluegrass"),
    ("americana", "americana"),
    ("alt-country", "alt-country"),
    ("outlaw country", "outlaw country"),
    ("honky-tonk", "honky-tonk"),
    ("western swing", "western swing"),
    ("dancehall", "dancehall"),
    ("roots reggae", "roots reggae"),
    ("dub reggae", "dub reggae"),
    ("ska punk", "ska punk"),
    ("two-tone", "two-tone"),
    ("calypso", "calypso"),
    ("soca", "soca"),
    ("salsa", "salsa"),
    ("merengue", "merengue"),
    ("bachata", "bachata"),
    ("cumbia", "cumbia"),
    ("reggaeton", "reggaeton"),
    ("latin pop", "latin pop"),
    ("bossa nova", "bossa nova"),
    ("samba", "samba"),
    ("forró", "forró"),
    ("mpb", "mpb"),
    ("tropicália", "tropicália"),
    ("fado", "fado"),
    ("flamenco", "flamenco"),
    ("tango", "tango"),
    ("mariachi", "mariachi"),
    ("ranchera", "ranchera"),
    ("norteño", "norteño"),
    ("conjunto", "conjunto"),
    ("tejano", "tejano"),
    ("zydeco", "zydeco"),
    ("cajun", "cajun"),
    ("celtic", "celtic"),
    ("irish traditional", "irish traditional"),
    ("scottish traditional", "scottish traditional"),
    ("klezmer", "klezmer"),
    ("polka", "polka"),
    ("waltz", "waltz"),
    ("mazurka", "mazurka"),
    ("tarantella", "tarantella"),
    ("fandango", "fandango"),
];

/// Substrings whose presence suggests a tag names a genre.
pub static GENRE_KEYWORDS: &[&str] = &[
    "core", "wave", "step", "hop", "house", "techno", "trance",
    "metal", "rock", "punk", "folk", "jazz", "blues", "soul",
    "funk", "disco", "reggae", "ska", "dub", "ambient", "drone",
    "noise", "industrial", "gothic", "dark", "black", "death",
    "thrash", "speed", "power", "prog", "post", "neo", "new",
    "old", "classic", "modern", "contemporary", "traditional",
    "experimental", "alternative", "indie", "underground",
    "mainstream", "commercial", "lo-fi", "hi-fi", "electronica",
    "electronic", "digital", "analog", "acoustic", "electric",
    "bass", "drum", "beat", "rhythm", "tempo", "bpm",
    "major", "minor", "key", "scale", "mode", "harmony",
    "melody", "vocal", "instrumental", "orchestral", "symphonic",
    "chamber", "ensemble", "band", "group", "solo", "duo",
    "trio", "quartet", "quintet", "sextet", "septet", "octet",
];

/// Substrings whose presence vetoes the keyword strategy.
///
/// Overlaps with the non-genre pattern library in places ("live" appears in
/// both). The two rule sets fire independently and are kept separate.
pub static NON_GENRE_KEYWORDS: &[&str] = &[
    "seen", "live", "concert", "favorite", "best", "top", "love",
    "awesome", "great", "good", "bad", "terrible", "amazing",
    "perfect", "beautiful", "ugly", "boring", "exciting",
    "recommended", "suggestion", "playlist", "album", "single",
    "ep", "compilation", "soundtrack", "theme", "cover", "remix",
    "edit", "version", "mix", "radio", "clean", "explicit",
    "censored", "uncensored", "remastered", "deluxe", "special",
    "limited", "edition", "bonus", "track", "disc", "cd", "vinyl",
    "digital", "download", "stream", "youtube", "spotify",
    "apple", "amazon", "google", "bandcamp", "soundcloud",
    "male", "female", "vocalist", "singer", "musician", "artist",
    "band", "group", "duo", "trio", "quartet", "solo",
    "british", "american", "canadian", "australian", "german",
    "french", "italian", "spanish", "japanese", "korean",
    "chinese", "russian", "brazilian", "mexican", "indian",
    "summer", "winter", "spring", "autumn", "fall", "christmas",
    "holiday", "birthday", "party", "wedding", "funeral",
    "morning", "afternoon", "evening", "night", "midnight",
    "driving", "walking", "running", "workout", "exercise",
    "study", "work", "sleep", "relax", "chill", "background",
    "emotional", "sad", "happy", "angry", "depressed", "excited",
    "romantic", "nostalgic", "melancholic", "upbeat", "mellow",
    "energetic", "calm", "peaceful", "aggressive", "violent",
];

/// Substrings that mark a tag as describing music, used by the context
/// strategy.
pub static MUSICAL_INDICATORS: &[&str] = &["music", "sound", "beat", "rhythm", "style", "wave"];

/// Regex patterns rejecting tags that are obviously not genres.
///
/// Matching is prefix-anchored and case-insensitive (the filter prepends the
/// anchor when compiling). A tag is rejected as soon as any one pattern
/// matches; the set is a pure OR, so ordering here is cosmetic.
pub static NON_GENRE_PATTERNS: &[&str] = &[
    r"^\d{2}s$",        // 90s, 80s
    r"^\d{4}s?$",       // 1990s, 2000
    r".*seen live.*",
    r".*favorites?.*",
    r".*recommended.*",
    r".*love.*",
    r".*awesome.*",
    r".*best.*",
    r".*top.*",
    r".*favorite.*",
    r".*male.*",
    r".*female.*",
    r".*british.*",
    r".*american.*",
    r".*canadian.*",
    r".*australian.*",
    r".*german.*",
    r".*french.*",
    r".*italian.*",
    r".*chill.*",
    r".*relax.*",
    r".*emotional.*",
    r".*romantic.*",
    r".*sad.*",
    r".*happy.*",
    r".*energetic.*",
    r".*melancholic.*",
    r".*upbeat.*",
    r".*mellow.*",
    r".*nostalgic.*",
    r".*party.*",
    r".*dance.*",
    r".*summer.*",
    r".*winter.*",
    r".*night.*",
    r".*morning.*",
    r".*driving.*",
    r".*workout.*",
    r".*study.*",
    r".*background.*",
    r".*instrumental.*",
    r".*acoustic.*",
    r".*live.*",
    r".*cover.*",
    r".*remix.*",
    r".*radio.*",
    r".*edit.*",
    r".*version.*",
    r".*mix.*",
    r".*single.*",
    r".*album.*",
    r".*ep.*",
    r".*compilation.*",
    r".*soundtrack.*",
    r".*theme.*",
    r".*christmas.*",
    r".*holiday.*",
];

/// Genre families for context inference: family name -> member substrings.
///
/// Not an ownership relation, just a lookup table. A tag containing any
/// member substring is considered family-adjacent.
pub static GENRE_FAMILIES: &[(&str, &[&str])] = &[
    ("rock", &["rock", "alternative", "indie", "grunge", "punk", "metal"]),
    ("electronic", &["electronic", "techno", "house", "trance", "dubstep", "ambient"]),
    ("hip_hop", &["hip-hop", "rap", "trap", "drill", "boom", "bap"]),
    ("jazz", &["jazz", "bebop", "swing", "fusion", "smooth", "free"]),
    ("blues", &["blues", "rhythm", "delta", "chicago", "electric"]),
    ("country", &["country", "folk", "bluegrass", "americana", "western"]),
    ("classical", &["classical", "baroque", "romantic", "modern", "opera"]),
    ("reggae", &["reggae", "ska", "dub", "dancehall", "roots"]),
    ("pop", &["pop", "dance", "disco", "synthpop", "electropop"]),
    ("r&b", &["rnb", "soul", "funk", "motown", "neo-soul"]),
];

/// Synonymous genre spellings folded together during deduplication.
///
/// Policy data, not logic: entries here may shadow taxonomy canonical names
/// (e.g. "alternative" re-maps to "alternative rock" even though the
/// taxonomy resolves it to itself).
pub static SYNONYMS: phf::Map<&'static str, &'static str> = phf_map! {
    "hiphop" => "hip-hop",
    "hip hop" => "hip-hop",
    "r&b" => "rnb",
    "r and b" => "rnb",
    "electronic music" => "electronic",
    "alt rock" => "alternative rock",
    "alternative" => "alternative rock",
};
