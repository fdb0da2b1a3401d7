//! Built-in word tables for [`super::LexiconAnalyzer`].
//!
//! Valences use the usual [-4, 4] scale of lexicon sentiment tools: a mild
//! word sits around ±1, a strong one around ±3. The table mixes general
//! English with the vocabulary of FX and macro headlines. Inflected forms are
//! listed separately because lookup is exact.

pub(crate) const WORDS: &[(&str, f64)] = &[
    // general positive
    ("good", 1.9),
    ("great", 3.1),
    ("excellent", 2.7),
    ("positive", 2.6),
    ("optimism", 2.5),
    ("optimistic", 2.3),
    ("confident", 2.2),
    ("confidence", 2.3),
    ("hope", 1.9),
    ("hopes", 1.9),
    ("hopeful", 2.2),
    ("benefit", 2.0),
    ("benefits", 1.6),
    ("success", 2.7),
    ("successful", 2.8),
    ("win", 2.8),
    ("wins", 2.7),
    ("winning", 2.4),
    ("better", 1.9),
    ("best", 3.2),
    ("improve", 1.9),
    ("improved", 2.1),
    ("improves", 1.8),
    ("improvement", 2.0),
    ("strong", 2.3),
    ("stronger", 1.6),
    ("strongest", 1.9),
    ("strength", 2.2),
    ("solid", 1.5),
    ("robust", 1.4),
    ("resilient", 1.2),
    ("resilience", 1.2),
    ("stable", 1.2),
    ("stability", 1.6),
    ("support", 1.7),
    ("supported", 1.3),
    ("supportive", 1.2),
    ("boost", 1.7),
    ("boosted", 1.5),
    ("boosts", 1.3),
    ("upbeat", 2.0),
    ("welcome", 2.0),
    ("welcomed", 1.6),
    ("agree", 1.5),
    ("agreement", 2.2),
    ("deal", 1.2),
    ("easing", 1.0),
    ("calm", 1.3),
    ("relief", 2.1),
    ("recover", 1.8),
    ("recovered", 1.7),
    ("recovery", 1.8),
    ("rebound", 1.4),
    ("rebounds", 1.4),
    ("rebounded", 1.4),
    ("rally", 1.7),
    ("rallies", 1.5),
    ("rallied", 1.5),
    ("surge", 1.5),
    ("surges", 1.4),
    ("surged", 1.4),
    ("soar", 2.0),
    ("soars", 1.8),
    ("soared", 1.8),
    ("gain", 2.4),
    ("gains", 1.8),
    ("gained", 1.6),
    ("growth", 1.6),
    ("grow", 1.4),
    ("grows", 1.3),
    ("expand", 1.3),
    ("expansion", 1.3),
    ("bullish", 2.0),
    ("outperform", 1.8),
    ("beat", 1.2),
    ("beats", 1.2),
    ("exceed", 1.4),
    ("exceeded", 1.4),
    ("record", 0.9),
    ("favorable", 2.1),
    ("healthy", 1.7),
    ("safe", 1.9),
    ("secure", 1.4),
    ("clear", 1.6),
    ("progress", 1.8),
    ("like", 1.5),
    ("love", 3.2),
    ("happy", 2.7),
    ("glad", 2.0),
    ("nice", 1.8),
    ("fine", 0.8),
    ("ok", 0.9),
    ("peace", 2.5),
    ("ceasefire", 1.4),
    ("truce", 1.4),
    ("opportunity", 1.8),
    ("upside", 1.3),
    ("steady", 1.0),
    // general negative
    ("bad", -2.5),
    ("worse", -2.1),
    ("worst", -3.1),
    ("poor", -2.1),
    ("negative", -2.7),
    ("pessimism", -2.0),
    ("pessimistic", -1.5),
    ("weak", -1.9),
    ("weaker", -1.9),
    ("weakest", -2.3),
    ("weakness", -1.8),
    ("weaken", -1.8),
    ("weakens", -1.3),
    ("weakened", -1.4),
    ("fear", -2.2),
    ("fears", -1.8),
    ("feared", -2.2),
    ("fearful", -2.2),
    ("worry", -1.9),
    ("worries", -1.7),
    ("worried", -1.2),
    ("concern", -1.3),
    ("concerns", -1.5),
    ("concerned", -1.3),
    ("anxiety", -0.7),
    ("uncertain", -1.2),
    ("uncertainty", -1.4),
    ("risk", -1.1),
    ("risks", -1.1),
    ("risky", -1.4),
    ("threat", -2.4),
    ("threats", -1.8),
    ("threaten", -2.4),
    ("threatens", -1.6),
    ("danger", -2.4),
    ("dangerous", -2.1),
    ("crisis", -3.1),
    ("crash", -1.7),
    ("crashes", -1.6),
    ("crashed", -1.7),
    ("collapse", -2.2),
    ("collapsed", -2.2),
    ("plunge", -1.9),
    ("plunges", -1.8),
    ("plunged", -1.8),
    ("slump", -1.9),
    ("slumps", -1.8),
    ("slumped", -1.8),
    ("tumble", -1.5),
    ("tumbles", -1.5),
    ("tumbled", -1.5),
    ("drop", -1.1),
    ("drops", -1.1),
    ("dropped", -1.2),
    ("fall", -1.0),
    ("falls", -1.0),
    ("fell", -1.2),
    ("falling", -1.0),
    ("decline", -1.1),
    ("declines", -1.1),
    ("declined", -1.1),
    ("loss", -1.3),
    ("losses", -1.7),
    ("lose", -1.7),
    ("loses", -1.3),
    ("lost", -1.3),
    ("slowdown", -1.5),
    ("slow", -0.7),
    ("slowing", -1.0),
    ("stall", -1.0),
    ("stalls", -1.0),
    ("stalled", -1.2),
    ("contraction", -1.3),
    ("shrink", -1.2),
    ("shrinks", -1.2),
    ("bearish", -1.9),
    ("recession", -2.2),
    ("stagflation", -1.9),
    ("turmoil", -2.4),
    ("volatility", -0.6),
    ("volatile", -1.0),
    ("panic", -2.3),
    ("selloff", -1.5),
    ("sell-off", -1.5),
    ("pressure", -1.2),
    ("pressures", -1.2),
    ("pressured", -1.4),
    ("struggle", -1.5),
    ("struggles", -1.5),
    ("struggling", -1.4),
    ("fail", -2.5),
    ("fails", -1.8),
    ("failed", -2.3),
    ("failure", -2.3),
    ("miss", -0.6),
    ("missed", -1.2),
    ("disappoint", -2.0),
    ("disappointing", -2.2),
    ("disappointed", -1.9),
    ("problem", -1.7),
    ("problems", -1.7),
    ("trouble", -1.7),
    ("troubles", -1.7),
    ("damage", -2.2),
    ("damaged", -1.9),
    ("hurt", -2.4),
    ("hurts", -2.1),
    ("harm", -2.5),
    ("shock", -1.6),
    ("shocks", -1.6),
    ("warning", -1.4),
    ("warns", -0.4),
    ("warned", -1.1),
    ("war", -2.9),
    ("wars", -2.6),
    ("conflict", -1.3),
    ("conflicts", -1.7),
    ("attack", -2.1),
    ("attacks", -1.9),
    ("invasion", -2.5),
    ("terror", -3.0),
    ("terrorism", -3.6),
    ("violence", -3.1),
    ("escalation", -1.4),
    ("sanctions", -1.0),
    ("penalty", -2.0),
    ("dispute", -1.7),
    ("tension", -1.3),
    ("tensions", -1.3),
    ("default", -1.2),
    ("bankruptcy", -2.6),
    ("fraud", -2.8),
    ("scandal", -2.2),
    ("hate", -2.7),
    ("sad", -2.1),
    ("angry", -2.3),
    ("downside", -1.0),
    ("headwind", -1.0),
    ("headwinds", -1.0),
    ("sluggish", -1.5),
    ("gloomy", -1.9),
    ("grim", -2.7),
    ("bleak", -2.0),
    ("dire", -2.5),
    ("no", -1.2),
];

/// Words that scale the intensity of the next sentiment word.
pub(crate) const BOOSTERS: &[(&str, f64)] = &[
    ("absolutely", B_INCR),
    ("amazingly", B_INCR),
    ("awfully", B_INCR),
    ("completely", B_INCR),
    ("considerably", B_INCR),
    ("decidedly", B_INCR),
    ("deeply", B_INCR),
    ("enormously", B_INCR),
    ("entirely", B_INCR),
    ("especially", B_INCR),
    ("exceptionally", B_INCR),
    ("extremely", B_INCR),
    ("greatly", B_INCR),
    ("highly", B_INCR),
    ("hugely", B_INCR),
    ("incredibly", B_INCR),
    ("intensely", B_INCR),
    ("more", B_INCR),
    ("most", B_INCR),
    ("particularly", B_INCR),
    ("quite", B_INCR),
    ("really", B_INCR),
    ("remarkably", B_INCR),
    ("sharply", B_INCR),
    ("significantly", B_INCR),
    ("so", B_INCR),
    ("strongly", B_INCR),
    ("substantially", B_INCR),
    ("thoroughly", B_INCR),
    ("totally", B_INCR),
    ("tremendously", B_INCR),
    ("unusually", B_INCR),
    ("utterly", B_INCR),
    ("very", B_INCR),
    ("almost", B_DECR),
    ("barely", B_DECR),
    ("hardly", B_DECR),
    ("kinda", B_DECR),
    ("less", B_DECR),
    ("little", B_DECR),
    ("marginal", B_DECR),
    ("marginally", B_DECR),
    ("modestly", B_DECR),
    ("occasionally", B_DECR),
    ("partly", B_DECR),
    ("scarcely", B_DECR),
    ("slight", B_DECR),
    ("slightly", B_DECR),
    ("somewhat", B_DECR),
    ("sorta", B_DECR),
];

/// Tokens that flip the polarity of a sentiment word up to three tokens later.
/// Any token containing `n't` counts as well.
pub(crate) const NEGATIONS: &[&str] = &[
    "aint", "arent", "cannot", "cant", "couldnt", "darent", "didnt", "doesnt", "dont", "hadnt",
    "hasnt", "havent", "isnt", "mightnt", "mustnt", "neither", "neednt", "never", "none", "nope",
    "nor", "not", "nothing", "nowhere", "oughtnt", "shant", "shouldnt", "wasnt", "werent",
    "without", "wont", "wouldnt", "rarely", "seldom", "despite",
];

pub(crate) const B_INCR: f64 = 0.293;
pub(crate) const B_DECR: f64 = -0.293;
/// Added to a word written in capitals when the text is not all capitals.
pub(crate) const C_INCR: f64 = 0.733;
/// Negation scalar.
pub(crate) const N_SCALAR: f64 = -0.74;
