//! Localized and misspelled names for "Various Artists".

use std::collections::HashSet;
use std::sync::LazyLock;

use super::normalize;

/// Spellings seen in the wild for a compilation's album artist.
pub const VARIOUS_ARTISTS_NAMES: &[&str] = &[
    "Various Artists", "Artistiaid Amrywiol", "Amrywiol", "Danske Kunstnere", "Div. kunstnere",
    "Diverse danske artister", "Diverse kunstnere", "Diverse", "Diverse Interpreten",
    "Diversen", "versch. Künstler", "Verschiedene", "Verschiedene Interpreten",
    "Διάφοροι Καλλιτέχνες", "(various)", "[Various Artists]", "Assorted Artists",
    "Assorted Christian Artists", "Hairspray (Karaoke) Various Artists", "Miscellaneous",
    "Mixed Artists", "More artists", "Multiple Artists", "Sampler",
    "Time Life Music: Various Artists", "V. A.", "V. Artist", "V.A.", "V/a", "VA", "Varied",
    "Various", "Various (not original artists)", "Various (original artists)",
    "Various Artist - GoGo Wonderful", "Various Big Bands", "Various Celtic Artists",
    "Various Composers", "Various DJ's", "Various Items", "Various Military Bands",
    "Various Speakers", "Various Talented Artists", "Compilaciones", "Varios",
    "Varios artistas", "Erinevad", "Erinevad esitajad", "Eri esittäjiä", "Artistes divers",
    "Artistes variés", "Bande originale", "Collectif", "Collégiale", "Comp.", "Compilation",
    "div.", "Divers", "Multi-artistes", "Multi-interprètes", "Variées", "Variés", "A.A.V.V.",
    "AA.VV.", "AAVV", "Artisti Vari", "ヴァリアス", "ヴァリアス・アーティスト", "オムニバス", "さまざまなアーティスト",
    "여러 아티스트", "Diverse Artister", "Diverse Artiesten", "Diverse componisten", "Iedereen",
    "Diverse Artistar", "Różni", "Różni artyści", "Różni wykonawcy", "Wszyscy artysci",
    "Coletânea", "Vários", "Vários artistas", "Vários intérpretes", "razlichnye ispolniteli",
    "[различные исполнители]", "Различные исполнители", "различных исполнителей",
    "Разные артисты", "Razlièni izvajalci", "Blandade artister", "Blandat", "รวมศิลปิน",
    "หลากหลายศิลปิน", "Çeşitli sanatçılar", "Rizni vykonavci", "Rizni vykonavtsi",
    "різних виконавців", "Різні виконавці", "Hợp ca", "Nhiều ca sĩ", "Nhiều nghệ sĩ", "Tốp ca",
    "Tốp ca nam", "群星", "合輯", "Various 80's", "Artis JK", "Artistas Varios",
    "Artisti uniti per l'Emilia", "Assorted Artisits", "Concatenation Records",
    "Die Brandstifter", "Div. artister", "DMT[REC]", "Dominicanos Varios",
    "La Historia de la Fania", "Intérpretes Diversos", "MDB", "Multi Interprètes",
    "Multi‐interprètes", "Noevir", "OST", "Stockfisch", "Tabu Recz", "Ｖ．Ａ.", "val",
    "VAR", "Vari", "Vari Artisti", "varias", "Varias Artistas", "Varies", "Variois",
    "Varios artists", "Varios Intérpretes", "Various Arists", "various aritsts",
    "Various Artist", "various artiste", "Various Artistes", "Various Artists [DIY]", "華納群星",
    "Various Artitsts", "Various Artsits", "Various Compiled By", "Various DHM Artists",
    "VariousArtist", "Variuos", "Variuos Artists", "Varius", "Varius Artist", "Varius Artists",
    "Varoius", "Varoius Artists", "Verious", "Vrious Artists", "VV AA", "ぱにぽにだっしゅ！", "世界小姐",
    "原声带", "多位艺术家", "多位藝術家", "影视原声", "歌手",
];

static NORMALIZED_NAMES: LazyLock<HashSet<String>> =
    LazyLock::new(|| VARIOUS_ARTISTS_NAMES.iter().map(|n| normalize(n)).collect());

/// True if `name` is, after trimming and lowercasing, one of the known
/// "Various Artists" spellings. Whole-string match only.
pub fn is_various_artists(name: &str) -> bool {
    NORMALIZED_NAMES.contains(&normalize(name))
}
