//! TokenKind enum - every token kind the q scanner can produce.
//!
//! Fixed-spelling kinds (reserved words, system names, operators) are listed
//! together with their spelling in [`LITERALS`]; the classifier trie is built
//! from that table. Literal kinds are numbered in table order, so the table
//! is sorted by discriminant.

/// The kind of a scanned token or trivia span.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u16)]
pub enum TokenKind {
    // ========================================================================
    // Errors
    // ========================================================================
    Unknown = 0,

    // Trivia
    WhitespaceTrivia = 1,
    LineCommentTrivia = 2,
    TrailingCommentTrivia = 3,
    BlockCommentTrivia = 4,
    DocCommentTrivia = 5,
    RestOfFileCommentTrivia = 6,

    // ========================================================================
    // Externally scanned kinds
    // ========================================================================
    Identifier = 10,
    SymbolLiteral = 11,
    StringLiteral = 12,
    NumericLiteral = 13,
    ByteLiteral = 14,
    BinaryLiteral = 15,
    TemporalLiteral = 16,

    // Punctuation
    OpenParenToken = 17,
    CloseParenToken = 18,
    OpenBracketToken = 19,
    CloseBracketToken = 20,
    OpenBraceToken = 21,
    CloseBraceToken = 22,
    QuoteToken = 23,
    UnderscoreToken = 24,

    // ========================================================================
    // Reserved words
    // ========================================================================
    AbsKeyword = 100,
    AcosKeyword = 101,
    AjKeyword = 102,
    Aj0Keyword = 103,
    AjfKeyword = 104,
    Ajf0Keyword = 105,
    AllKeyword = 106,
    AndKeyword = 107,
    AnyKeyword = 108,
    AscKeyword = 109,
    AsinKeyword = 110,
    AsofKeyword = 111,
    AtanKeyword = 112,
    AttrKeyword = 113,
    AvgKeyword = 114,
    AvgsKeyword = 115,
    BinKeyword = 116,
    BinrKeyword = 117,
    CeilingKeyword = 118,
    ColsKeyword = 119,
    CorKeyword = 120,
    CosKeyword = 121,
    CountKeyword = 122,
    CovKeyword = 123,
    CrossKeyword = 124,
    CutKeyword = 125,
    DeleteKeyword = 126,
    DeltasKeyword = 127,
    DescKeyword = 128,
    DevKeyword = 129,
    DifferKeyword = 130,
    DistinctKeyword = 131,
    DivKeyword = 132,
    DoKeyword = 133,
    DsaveKeyword = 134,
    EachKeyword = 135,
    EjKeyword = 136,
    EmaKeyword = 137,
    EnlistKeyword = 138,
    EvalKeyword = 139,
    ExceptKeyword = 140,
    ExecKeyword = 141,
    ExitKeyword = 142,
    ExpKeyword = 143,
    FbyKeyword = 144,
    FillsKeyword = 145,
    FirstKeyword = 146,
    FkeysKeyword = 147,
    FlipKeyword = 148,
    FloorKeyword = 149,
    GetKeyword = 150,
    GetenvKeyword = 151,
    GroupKeyword = 152,
    GtimeKeyword = 153,
    HcloseKeyword = 154,
    HcountKeyword = 155,
    HdelKeyword = 156,
    HopenKeyword = 157,
    HsymKeyword = 158,
    IascKeyword = 159,
    IdescKeyword = 160,
    IfKeyword = 161,
    IjKeyword = 162,
    IjfKeyword = 163,
    InKeyword = 164,
    InsertKeyword = 165,
    InterKeyword = 166,
    InvKeyword = 167,
    KeyKeyword = 168,
    KeysKeyword = 169,
    LastKeyword = 170,
    LikeKeyword = 171,
    LjKeyword = 172,
    LjfKeyword = 173,
    LoadKeyword = 174,
    LogKeyword = 175,
    LowerKeyword = 176,
    LsqKeyword = 177,
    LtimeKeyword = 178,
    LtrimKeyword = 179,
    MavgKeyword = 180,
    MaxKeyword = 181,
    MaxsKeyword = 182,
    McountKeyword = 183,
    Md5Keyword = 184,
    MdevKeyword = 185,
    MedKeyword = 186,
    MetaKeyword = 187,
    MinKeyword = 188,
    MinsKeyword = 189,
    MmaxKeyword = 190,
    MminKeyword = 191,
    MmuKeyword = 192,
    ModKeyword = 193,
    MsumKeyword = 194,
    NegKeyword = 195,
    NextKeyword = 196,
    NotKeyword = 197,
    NullKeyword = 198,
    OrKeyword = 199,
    OverKeyword = 200,
    ParseKeyword = 201,
    PeachKeyword = 202,
    PjKeyword = 203,
    PrdKeyword = 204,
    PrdsKeyword = 205,
    PrevKeyword = 206,
    PriorKeyword = 207,
    RandKeyword = 208,
    RankKeyword = 209,
    RatiosKeyword = 210,
    RazeKeyword = 211,
    Read0Keyword = 212,
    Read1Keyword = 213,
    ReciprocalKeyword = 214,
    RevalKeyword = 215,
    ReverseKeyword = 216,
    RloadKeyword = 217,
    RotateKeyword = 218,
    RsaveKeyword = 219,
    RtrimKeyword = 220,
    SaveKeyword = 221,
    ScanKeyword = 222,
    ScovKeyword = 223,
    SdevKeyword = 224,
    SelectKeyword = 225,
    SetKeyword = 226,
    SetenvKeyword = 227,
    ShowKeyword = 228,
    SignumKeyword = 229,
    SinKeyword = 230,
    SqrtKeyword = 231,
    SsKeyword = 232,
    SsrKeyword = 233,
    StringKeyword = 234,
    SublistKeyword = 235,
    SumKeyword = 236,
    SumsKeyword = 237,
    SvKeyword = 238,
    SvarKeyword = 239,
    SystemKeyword = 240,
    TablesKeyword = 241,
    TanKeyword = 242,
    TilKeyword = 243,
    TrimKeyword = 244,
    TypeKeyword = 245,
    UjKeyword = 246,
    UjfKeyword = 247,
    UngroupKeyword = 248,
    UnionKeyword = 249,
    UpdateKeyword = 250,
    UpperKeyword = 251,
    UpsertKeyword = 252,
    ValueKeyword = 253,
    VarKeyword = 254,
    ViewKeyword = 255,
    ViewsKeyword = 256,
    VsKeyword = 257,
    WavgKeyword = 258,
    WhereKeyword = 259,
    WhileKeyword = 260,
    WithinKeyword = 261,
    WjKeyword = 262,
    Wj1Keyword = 263,
    WsumKeyword = 264,
    XascKeyword = 265,
    XcolKeyword = 266,
    XcolsKeyword = 267,
    XdescKeyword = 268,
    XexpKeyword = 269,
    XlogKeyword = 270,
    XprevKeyword = 271,
    XbarKeyword = 272,
    XgroupKeyword = 273,
    XkeyKeyword = 274,
    XrankKeyword = 275,

    // ========================================================================
    // System names (.h, .j, .Q, .z namespaces)
    // ========================================================================
    DotHBr = 300,
    DotHC0 = 301,
    DotHC1 = 302,
    DotHCd = 303,
    DotHCode = 304,
    DotHD = 305,
    DotHEd = 306,
    DotHEdsn = 307,
    DotHFram = 308,
    DotHHa = 309,
    DotHHb = 310,
    DotHHc = 311,
    DotHHe = 312,
    DotHHn = 313,
    DotHHomeUpper = 314,
    DotHHp = 315,
    DotHHr = 316,
    DotHHt = 317,
    DotHHta = 318,
    DotHHtac = 319,
    DotHHtc = 320,
    DotHHtml = 321,
    DotHHttp = 322,
    DotHHu = 323,
    DotHHug = 324,
    DotHHy = 325,
    DotHIso8601 = 326,
    DotHJx = 327,
    DotHLogo = 328,
    DotHNbr = 329,
    DotHPre = 330,
    DotHSa = 331,
    DotHSb = 332,
    DotHSc = 333,
    DotHTd = 334,
    DotHText = 335,
    DotHTx = 336,
    DotHTy = 337,
    DotHUh = 338,
    DotHVal = 339,
    DotHXd = 340,
    DotHXmp = 341,
    DotHXs = 342,
    DotHXt = 343,

    DotJJ = 344,
    DotJK = 345,
    DotJJd = 346,

    DotQA = 347,
    DotQAUpper = 348,
    DotQAddmonths = 349,
    DotQAddr = 350,
    DotQB6 = 351,
    DotQBt = 352,
    DotQBtoa = 353,
    DotQBv = 354,
    DotQCf = 355,
    DotQChk = 356,
    DotQCn = 357,
    DotQDUpper = 358,
    DotQDd = 359,
    DotQDef = 360,
    DotQDpft = 361,
    DotQDpfts = 362,
    DotQDsftg = 363,
    DotQEn = 364,
    DotQEns = 365,
    DotQF = 366,
    DotQFc = 367,
    DotQFf = 368,
    DotQFk = 369,
    DotQFmt = 370,
    DotQFps = 371,
    DotQFqk = 372,
    DotQFs = 373,
    DotQFsn = 374,
    DotQFt = 375,
    DotQFu = 376,
    DotQGc = 377,
    DotQGz = 378,
    DotQHdpf = 379,
    DotQHg = 380,
    DotQHost = 381,
    DotQHp = 382,
    DotQId = 383,
    DotQInd = 384,
    DotQJ10 = 385,
    DotQJ12 = 386,
    DotQK = 387,
    DotQL = 388,
    DotQMUpper = 389,
    DotQMapUpper = 390,
    DotQNA = 391,
    DotQOpt = 392,
    DotQPUpper = 393,
    DotQPar = 394,
    DotQPd = 395,
    DotQPdUpper = 396,
    DotQPf = 397,
    DotQPn = 398,
    DotQPrf0 = 399,
    DotQPt = 400,
    DotQPv = 401,
    DotQPvUpper = 402,
    DotQQp = 403,
    DotQQt = 404,
    DotQRes = 405,
    DotQS = 406,
    DotQS1 = 407,
    DotQSbt = 408,
    DotQSha1 = 409,
    DotQTrp = 410,
    DotQTs = 411,
    DotQTy = 412,
    DotQU = 413,
    DotQVUpper = 414,
    DotQV = 415,
    DotQView = 416,
    DotQVp = 417,
    DotQW = 418,
    DotQX = 419,
    DotQX10 = 420,
    DotQX12 = 421,
    DotQXf = 422,

    DotZA = 423,
    DotZAc = 424,
    DotZB = 425,
    DotZBm = 426,
    DotZC = 427,
    DotZE = 428,
    DotZExit = 429,
    DotZF = 430,
    DotZH = 431,
    DotZI = 432,
    DotZK = 433,
    DotZKUpper = 434,
    DotZL = 435,
    DotZN = 436,
    DotZNUpper = 437,
    DotZO = 438,
    DotZP = 439,
    DotZPUpper = 440,
    DotZPc = 441,
    DotZPg = 442,
    DotZPd = 443,
    DotZPh = 444,
    DotZPi = 445,
    DotZPm = 446,
    DotZPo = 447,
    DotZPp = 448,
    DotZPs = 449,
    DotZPw = 450,
    DotZQ = 451,
    DotZS = 452,
    DotZTs = 453,
    DotZU = 454,
    DotZVs = 455,
    DotZW = 456,
    DotZWc = 457,
    DotZWo = 458,
    DotZWUpper = 459,
    DotZWs = 460,
    DotZX = 461,
    DotZXUpper = 462,
    DotZZ = 463,
    DotZZUpper = 464,
    DotZT = 465,
    DotZTUpper = 466,
    DotZD = 467,
    DotZDUpper = 468,
    DotZZd = 469,

    // ========================================================================
    // Operators
    // ========================================================================
    PlusToken = 500,
    MinusToken = 501,
    AsteriskToken = 502,
    PercentToken = 503,
    EqualsToken = 504,
    LessThanGreaterThanToken = 505,
    TildeToken = 506,
    LessThanToken = 507,
    GreaterThanToken = 508,
    LessThanEqualsToken = 509,
    GreaterThanEqualsToken = 510,
    BarToken = 511,
    AmpersandToken = 512,
    AtToken = 513,
    HashToken = 514,
    CommaToken = 515,
    SlashColonToken = 516,
    DotToken = 517,
    SemicolonToken = 518,
    ColonToken = 519,
    QuestionToken = 520,
    ExclamationToken = 521,
    DollarToken = 522,
    CaretToken = 523,
    BackslashToken = 524,
    SlashToken = 525,
    PlusEqualsToken = 526,
    MinusEqualsToken = 527,
    AsteriskEqualsToken = 528,
    SlashEqualsToken = 529,
    PercentEqualsToken = 530,
    ExpEqualsToken = 531,
    LogEqualsToken = 532,
    SqrtEqualsToken = 533,
    EqualsEqualsToken = 534,
    LessThanGreaterThanEqualsToken = 535,
}

impl TokenKind {
    pub const FIRST_TRIVIA: TokenKind = TokenKind::WhitespaceTrivia;
    pub const LAST_TRIVIA: TokenKind = TokenKind::RestOfFileCommentTrivia;
    pub const FIRST_LITERAL: TokenKind = TokenKind::SymbolLiteral;
    pub const LAST_LITERAL: TokenKind = TokenKind::TemporalLiteral;
    pub const FIRST_PUNCTUATION: TokenKind = TokenKind::OpenParenToken;
    pub const LAST_PUNCTUATION: TokenKind = TokenKind::UnderscoreToken;
    pub const FIRST_KEYWORD: TokenKind = TokenKind::AbsKeyword;
    pub const LAST_KEYWORD: TokenKind = TokenKind::XrankKeyword;
    pub const FIRST_SYSTEM_NAME: TokenKind = TokenKind::DotHBr;
    pub const LAST_SYSTEM_NAME: TokenKind = TokenKind::DotZZd;
    pub const FIRST_OPERATOR: TokenKind = TokenKind::PlusToken;
    pub const LAST_OPERATOR: TokenKind = TokenKind::LessThanGreaterThanEqualsToken;
    pub const FIRST_COMPOUND_ASSIGNMENT: TokenKind = TokenKind::PlusEqualsToken;
    pub const LAST_COMPOUND_ASSIGNMENT: TokenKind = TokenKind::SqrtEqualsToken;
}

/// Every fixed-spelling token, as `(spelling, kind)` pairs sorted by kind.
///
/// Spellings are unique and matched byte-exact.
pub static LITERALS: &[(&str, TokenKind)] = &[
    ("abs", TokenKind::AbsKeyword),
    ("acos", TokenKind::AcosKeyword),
    ("aj", TokenKind::AjKeyword),
    ("aj0", TokenKind::Aj0Keyword),
    ("ajf", TokenKind::AjfKeyword),
    ("ajf0", TokenKind::Ajf0Keyword),
    ("all", TokenKind::AllKeyword),
    ("and", TokenKind::AndKeyword),
    ("any", TokenKind::AnyKeyword),
    ("asc", TokenKind::AscKeyword),
    ("asin", TokenKind::AsinKeyword),
    ("asof", TokenKind::AsofKeyword),
    ("atan", TokenKind::AtanKeyword),
    ("attr", TokenKind::AttrKeyword),
    ("avg", TokenKind::AvgKeyword),
    ("avgs", TokenKind::AvgsKeyword),
    ("bin", TokenKind::BinKeyword),
    ("binr", TokenKind::BinrKeyword),
    ("ceiling", TokenKind::CeilingKeyword),
    ("cols", TokenKind::ColsKeyword),
    ("cor", TokenKind::CorKeyword),
    ("cos", TokenKind::CosKeyword),
    ("count", TokenKind::CountKeyword),
    ("cov", TokenKind::CovKeyword),
    ("cross", TokenKind::CrossKeyword),
    ("cut", TokenKind::CutKeyword),
    ("delete", TokenKind::DeleteKeyword),
    ("deltas", TokenKind::DeltasKeyword),
    ("desc", TokenKind::DescKeyword),
    ("dev", TokenKind::DevKeyword),
    ("differ", TokenKind::DifferKeyword),
    ("distinct", TokenKind::DistinctKeyword),
    ("div", TokenKind::DivKeyword),
    ("do", TokenKind::DoKeyword),
    ("dsave", TokenKind::DsaveKeyword),
    ("each", TokenKind::EachKeyword),
    ("ej", TokenKind::EjKeyword),
    ("ema", TokenKind::EmaKeyword),
    ("enlist", TokenKind::EnlistKeyword),
    ("eval", TokenKind::EvalKeyword),
    ("except", TokenKind::ExceptKeyword),
    ("exec", TokenKind::ExecKeyword),
    ("exit", TokenKind::ExitKeyword),
    ("exp", TokenKind::ExpKeyword),
    ("fby", TokenKind::FbyKeyword),
    ("fills", TokenKind::FillsKeyword),
    ("first", TokenKind::FirstKeyword),
    ("fkeys", TokenKind::FkeysKeyword),
    ("flip", TokenKind::FlipKeyword),
    ("floor", TokenKind::FloorKeyword),
    ("get", TokenKind::GetKeyword),
    ("getenv", TokenKind::GetenvKeyword),
    ("group", TokenKind::GroupKeyword),
    ("gtime", TokenKind::GtimeKeyword),
    ("hclose", TokenKind::HcloseKeyword),
    ("hcount", TokenKind::HcountKeyword),
    ("hdel", TokenKind::HdelKeyword),
    ("hopen", TokenKind::HopenKeyword),
    ("hsym", TokenKind::HsymKeyword),
    ("iasc", TokenKind::IascKeyword),
    ("idesc", TokenKind::IdescKeyword),
    ("if", TokenKind::IfKeyword),
    ("ij", TokenKind::IjKeyword),
    ("ijf", TokenKind::IjfKeyword),
    ("in", TokenKind::InKeyword),
    ("insert", TokenKind::InsertKeyword),
    ("inter", TokenKind::InterKeyword),
    ("inv", TokenKind::InvKeyword),
    ("key", TokenKind::KeyKeyword),
    ("keys", TokenKind::KeysKeyword),
    ("last", TokenKind::LastKeyword),
    ("like", TokenKind::LikeKeyword),
    ("lj", TokenKind::LjKeyword),
    ("ljf", TokenKind::LjfKeyword),
    ("load", TokenKind::LoadKeyword),
    ("log", TokenKind::LogKeyword),
    ("lower", TokenKind::LowerKeyword),
    ("lsq", TokenKind::LsqKeyword),
    ("ltime", TokenKind::LtimeKeyword),
    ("ltrim", TokenKind::LtrimKeyword),
    ("mavg", TokenKind::MavgKeyword),
    ("max", TokenKind::MaxKeyword),
    ("maxs", TokenKind::MaxsKeyword),
    ("mcount", TokenKind::McountKeyword),
    ("md5", TokenKind::Md5Keyword),
    ("mdev", TokenKind::MdevKeyword),
    ("med", TokenKind::MedKeyword),
    ("meta", TokenKind::MetaKeyword),
    ("min", TokenKind::MinKeyword),
    ("mins", TokenKind::MinsKeyword),
    ("mmax", TokenKind::MmaxKeyword),
    ("mmin", TokenKind::MminKeyword),
    ("mmu", TokenKind::MmuKeyword),
    ("mod", TokenKind::ModKeyword),
    ("msum", TokenKind::MsumKeyword),
    ("neg", TokenKind::NegKeyword),
    ("next", TokenKind::NextKeyword),
    ("not", TokenKind::NotKeyword),
    ("null", TokenKind::NullKeyword),
    ("or", TokenKind::OrKeyword),
    ("over", TokenKind::OverKeyword),
    ("parse", TokenKind::ParseKeyword),
    ("peach", TokenKind::PeachKeyword),
    ("pj", TokenKind::PjKeyword),
    ("prd", TokenKind::PrdKeyword),
    ("prds", TokenKind::PrdsKeyword),
    ("prev", TokenKind::PrevKeyword),
    ("prior", TokenKind::PriorKeyword),
    ("rand", TokenKind::RandKeyword),
    ("rank", TokenKind::RankKeyword),
    ("ratios", TokenKind::RatiosKeyword),
    ("raze", TokenKind::RazeKeyword),
    ("read0", TokenKind::Read0Keyword),
    ("read1", TokenKind::Read1Keyword),
    ("reciprocal", TokenKind::ReciprocalKeyword),
    ("reval", TokenKind::RevalKeyword),
    ("reverse", TokenKind::ReverseKeyword),
    ("rload", TokenKind::RloadKeyword),
    ("rotate", TokenKind::RotateKeyword),
    ("rsave", TokenKind::RsaveKeyword),
    ("rtrim", TokenKind::RtrimKeyword),
    ("save", TokenKind::SaveKeyword),
    ("scan", TokenKind::ScanKeyword),
    ("scov", TokenKind::ScovKeyword),
    ("sdev", TokenKind::SdevKeyword),
    ("select", TokenKind::SelectKeyword),
    ("set", TokenKind::SetKeyword),
    ("setenv", TokenKind::SetenvKeyword),
    ("show", TokenKind::ShowKeyword),
    ("signum", TokenKind::SignumKeyword),
    ("sin", TokenKind::SinKeyword),
    ("sqrt", TokenKind::SqrtKeyword),
    ("ss", TokenKind::SsKeyword),
    ("ssr", TokenKind::SsrKeyword),
    ("string", TokenKind::StringKeyword),
    ("sublist", TokenKind::SublistKeyword),
    ("sum", TokenKind::SumKeyword),
    ("sums", TokenKind::SumsKeyword),
    ("sv", TokenKind::SvKeyword),
    ("svar", TokenKind::SvarKeyword),
    ("system", TokenKind::SystemKeyword),
    ("tables", TokenKind::TablesKeyword),
    ("tan", TokenKind::TanKeyword),
    ("til", TokenKind::TilKeyword),
    ("trim", TokenKind::TrimKeyword),
    ("type", TokenKind::TypeKeyword),
    ("uj", TokenKind::UjKeyword),
    ("ujf", TokenKind::UjfKeyword),
    ("ungroup", TokenKind::UngroupKeyword),
    ("union", TokenKind::UnionKeyword),
    ("update", TokenKind::UpdateKeyword),
    ("upper", TokenKind::UpperKeyword),
    ("upsert", TokenKind::UpsertKeyword),
    ("value", TokenKind::ValueKeyword),
    ("var", TokenKind::VarKeyword),
    ("view", TokenKind::ViewKeyword),
    ("views", TokenKind::ViewsKeyword),
    ("vs", TokenKind::VsKeyword),
    ("wavg", TokenKind::WavgKeyword),
    ("where", TokenKind::WhereKeyword),
    ("while", TokenKind::WhileKeyword),
    ("within", TokenKind::WithinKeyword),
    ("wj", TokenKind::WjKeyword),
    ("wj1", TokenKind::Wj1Keyword),
    ("wsum", TokenKind::WsumKeyword),
    ("xasc", TokenKind::XascKeyword),
    ("xcol", TokenKind::XcolKeyword),
    ("xcols", TokenKind::XcolsKeyword),
    ("xdesc", TokenKind::XdescKeyword),
    ("xexp", TokenKind::XexpKeyword),
    ("xlog", TokenKind::XlogKeyword),
    ("xprev", TokenKind::XprevKeyword),
    ("xbar", TokenKind::XbarKeyword),
    ("xgroup", TokenKind::XgroupKeyword),
    ("xkey", TokenKind::XkeyKeyword),
    ("xrank", TokenKind::XrankKeyword),
    (".h.br", TokenKind::DotHBr),
    (".h.c0", TokenKind::DotHC0),
    (".h.c1", TokenKind::DotHC1),
    (".h.cd", TokenKind::DotHCd),
    (".h.code", TokenKind::DotHCode),
    (".h.d", TokenKind::DotHD),
    (".h.ed", TokenKind::DotHEd),
    (".h.edsn", TokenKind::DotHEdsn),
    (".h.fram", TokenKind::DotHFram),
    (".h.ha", TokenKind::DotHHa),
    (".h.hb", TokenKind::DotHHb),
    (".h.hc", TokenKind::DotHHc),
    (".h.he", TokenKind::DotHHe),
    (".h.hn", TokenKind::DotHHn),
    (".h.HOME", TokenKind::DotHHomeUpper),
    (".h.hp", TokenKind::DotHHp),
    (".h.hr", TokenKind::DotHHr),
    (".h.ht", TokenKind::DotHHt),
    (".h.hta", TokenKind::DotHHta),
    (".h.htac", TokenKind::DotHHtac),
    (".h.htc", TokenKind::DotHHtc),
    (".h.html", TokenKind::DotHHtml),
    (".h.http", TokenKind::DotHHttp),
    (".h.hu", TokenKind::DotHHu),
    (".h.hug", TokenKind::DotHHug),
    (".h.hy", TokenKind::DotHHy),
    (".h.iso8601", TokenKind::DotHIso8601),
    (".h.jx", TokenKind::DotHJx),
    (".h.logo", TokenKind::DotHLogo),
    (".h.nbr", TokenKind::DotHNbr),
    (".h.pre", TokenKind::DotHPre),
    (".h.sa", TokenKind::DotHSa),
    (".h.sb", TokenKind::DotHSb),
    (".h.sc", TokenKind::DotHSc),
    (".h.td", TokenKind::DotHTd),
    (".h.text", TokenKind::DotHText),
    (".h.tx", TokenKind::DotHTx),
    (".h.ty", TokenKind::DotHTy),
    (".h.uh", TokenKind::DotHUh),
    (".h.val", TokenKind::DotHVal),
    (".h.xd", TokenKind::DotHXd),
    (".h.xmp", TokenKind::DotHXmp),
    (".h.xs", TokenKind::DotHXs),
    (".h.xt", TokenKind::DotHXt),
    (".j.j", TokenKind::DotJJ),
    (".j.k", TokenKind::DotJK),
    (".j.jd", TokenKind::DotJJd),
    (".Q.a", TokenKind::DotQA),
    (".Q.A", TokenKind::DotQAUpper),
    (".Q.addmonths", TokenKind::DotQAddmonths),
    (".Q.addr", TokenKind::DotQAddr),
    (".Q.b6", TokenKind::DotQB6),
    (".Q.bt", TokenKind::DotQBt),
    (".Q.btoa", TokenKind::DotQBtoa),
    (".Q.bv", TokenKind::DotQBv),
    (".Q.Cf", TokenKind::DotQCf),
    (".Q.chk", TokenKind::DotQChk),
    (".Q.cn", TokenKind::DotQCn),
    (".Q.D", TokenKind::DotQDUpper),
    (".Q.dd", TokenKind::DotQDd),
    (".Q.def", TokenKind::DotQDef),
    (".Q.dpft", TokenKind::DotQDpft),
    (".Q.dpfts", TokenKind::DotQDpfts),
    (".Q.dsftg", TokenKind::DotQDsftg),
    (".Q.en", TokenKind::DotQEn),
    (".Q.ens", TokenKind::DotQEns),
    (".Q.f", TokenKind::DotQF),
    (".Q.fc", TokenKind::DotQFc),
    (".Q.ff", TokenKind::DotQFf),
    (".Q.fk", TokenKind::DotQFk),
    (".Q.fmt", TokenKind::DotQFmt),
    (".Q.fps", TokenKind::DotQFps),
    (".Q.fqk", TokenKind::DotQFqk),
    (".Q.fs", TokenKind::DotQFs),
    (".Q.fsn", TokenKind::DotQFsn),
    (".Q.ft", TokenKind::DotQFt),
    (".Q.fu", TokenKind::DotQFu),
    (".Q.gc", TokenKind::DotQGc),
    (".Q.gz", TokenKind::DotQGz),
    (".Q.hdpf", TokenKind::DotQHdpf),
    (".Q.hg", TokenKind::DotQHg),
    (".Q.host", TokenKind::DotQHost),
    (".Q.hp", TokenKind::DotQHp),
    (".Q.id", TokenKind::DotQId),
    (".Q.ind", TokenKind::DotQInd),
    (".Q.j10", TokenKind::DotQJ10),
    (".Q.j12", TokenKind::DotQJ12),
    (".Q.k", TokenKind::DotQK),
    (".Q.l", TokenKind::DotQL),
    (".Q.M", TokenKind::DotQMUpper),
    (".Q.MAP", TokenKind::DotQMapUpper),
    (".Q.nA", TokenKind::DotQNA),
    (".Q.opt", TokenKind::DotQOpt),
    (".Q.P", TokenKind::DotQPUpper),
    (".Q.par", TokenKind::DotQPar),
    (".Q.pd", TokenKind::DotQPd),
    (".Q.PD", TokenKind::DotQPdUpper),
    (".Q.pf", TokenKind::DotQPf),
    (".Q.pn", TokenKind::DotQPn),
    (".Q.prf0", TokenKind::DotQPrf0),
    (".Q.pt", TokenKind::DotQPt),
    (".Q.pv", TokenKind::DotQPv),
    (".Q.PV", TokenKind::DotQPvUpper),
    (".Q.qp", TokenKind::DotQQp),
    (".Q.qt", TokenKind::DotQQt),
    (".Q.res", TokenKind::DotQRes),
    (".Q.s", TokenKind::DotQS),
    (".Q.s1", TokenKind::DotQS1),
    (".Q.sbt", TokenKind::DotQSbt),
    (".Q.sha1", TokenKind::DotQSha1),
    (".Q.trp", TokenKind::DotQTrp),
    (".Q.ts", TokenKind::DotQTs),
    (".Q.ty", TokenKind::DotQTy),
    (".Q.u", TokenKind::DotQU),
    (".Q.V", TokenKind::DotQVUpper),
    (".Q.v", TokenKind::DotQV),
    (".Q.view", TokenKind::DotQView),
    (".Q.vp", TokenKind::DotQVp),
    (".Q.w", TokenKind::DotQW),
    (".Q.x", TokenKind::DotQX),
    (".Q.x10", TokenKind::DotQX10),
    (".Q.x12", TokenKind::DotQX12),
    (".Q.Xf", TokenKind::DotQXf),
    (".z.a", TokenKind::DotZA),
    (".z.ac", TokenKind::DotZAc),
    (".z.b", TokenKind::DotZB),
    (".z.bm", TokenKind::DotZBm),
    (".z.c", TokenKind::DotZC),
    (".z.e", TokenKind::DotZE),
    (".z.exit", TokenKind::DotZExit),
    (".z.f", TokenKind::DotZF),
    (".z.h", TokenKind::DotZH),
    (".z.i", TokenKind::DotZI),
    (".z.k", TokenKind::DotZK),
    (".z.K", TokenKind::DotZKUpper),
    (".z.l", TokenKind::DotZL),
    (".z.n", TokenKind::DotZN),
    (".z.N", TokenKind::DotZNUpper),
    (".z.o", TokenKind::DotZO),
    (".z.p", TokenKind::DotZP),
    (".z.P", TokenKind::DotZPUpper),
    (".z.pc", TokenKind::DotZPc),
    (".z.pg", TokenKind::DotZPg),
    (".z.pd", TokenKind::DotZPd),
    (".z.ph", TokenKind::DotZPh),
    (".z.pi", TokenKind::DotZPi),
    (".z.pm", TokenKind::DotZPm),
    (".z.po", TokenKind::DotZPo),
    (".z.pp", TokenKind::DotZPp),
    (".z.ps", TokenKind::DotZPs),
    (".z.pw", TokenKind::DotZPw),
    (".z.q", TokenKind::DotZQ),
    (".z.s", TokenKind::DotZS),
    (".z.ts", TokenKind::DotZTs),
    (".z.u", TokenKind::DotZU),
    (".z.vs", TokenKind::DotZVs),
    (".z.w", TokenKind::DotZW),
    (".z.wc", TokenKind::DotZWc),
    (".z.wo", TokenKind::DotZWo),
    (".z.W", TokenKind::DotZWUpper),
    (".z.ws", TokenKind::DotZWs),
    (".z.x", TokenKind::DotZX),
    (".z.X", TokenKind::DotZXUpper),
    (".z.z", TokenKind::DotZZ),
    (".z.Z", TokenKind::DotZZUpper),
    (".z.t", TokenKind::DotZT),
    (".z.T", TokenKind::DotZTUpper),
    (".z.d", TokenKind::DotZD),
    (".z.D", TokenKind::DotZDUpper),
    (".z.zd", TokenKind::DotZZd),
    ("+", TokenKind::PlusToken),
    ("-", TokenKind::MinusToken),
    ("*", TokenKind::AsteriskToken),
    ("%", TokenKind::PercentToken),
    ("=", TokenKind::EqualsToken),
    ("<>", TokenKind::LessThanGreaterThanToken),
    ("~", TokenKind::TildeToken),
    ("<", TokenKind::LessThanToken),
    (">", TokenKind::GreaterThanToken),
    ("<=", TokenKind::LessThanEqualsToken),
    (">=", TokenKind::GreaterThanEqualsToken),
    ("|", TokenKind::BarToken),
    ("&", TokenKind::AmpersandToken),
    ("@", TokenKind::AtToken),
    ("#", TokenKind::HashToken),
    (",", TokenKind::CommaToken),
    ("/:", TokenKind::SlashColonToken),
    (".", TokenKind::DotToken),
    (";", TokenKind::SemicolonToken),
    (":", TokenKind::ColonToken),
    ("?", TokenKind::QuestionToken),
    ("!", TokenKind::ExclamationToken),
    ("$", TokenKind::DollarToken),
    ("^", TokenKind::CaretToken),
    ("\\", TokenKind::BackslashToken),
    ("/", TokenKind::SlashToken),
    ("+=", TokenKind::PlusEqualsToken),
    ("-=", TokenKind::MinusEqualsToken),
    ("*=", TokenKind::AsteriskEqualsToken),
    ("/=", TokenKind::SlashEqualsToken),
    ("%=", TokenKind::PercentEqualsToken),
    ("exp=", TokenKind::ExpEqualsToken),
    ("log=", TokenKind::LogEqualsToken),
    ("sqrt=", TokenKind::SqrtEqualsToken),
    ("==", TokenKind::EqualsEqualsToken),
    ("<>=", TokenKind::LessThanGreaterThanEqualsToken),
];

impl TokenKind {
    /// Whether this kind represents trivia.
    #[inline]
    pub fn is_trivia(self) -> bool {
        let v = self as u16;
        v >= TokenKind::FIRST_TRIVIA as u16 && v <= TokenKind::LAST_TRIVIA as u16
    }

    /// Whether this kind is a literal produced by the literal scanner.
    #[inline]
    pub fn is_literal(self) -> bool {
        let v = self as u16;
        v >= TokenKind::FIRST_LITERAL as u16 && v <= TokenKind::LAST_LITERAL as u16
    }

    /// Whether this kind represents a punctuation token.
    #[inline]
    pub fn is_punctuation(self) -> bool {
        let v = self as u16;
        v >= TokenKind::FIRST_PUNCTUATION as u16 && v <= TokenKind::LAST_PUNCTUATION as u16
    }

    /// Whether this kind represents a reserved word.
    #[inline]
    pub fn is_keyword(self) -> bool {
        let v = self as u16;
        v >= TokenKind::FIRST_KEYWORD as u16 && v <= TokenKind::LAST_KEYWORD as u16
    }

    /// Whether this kind represents a namespaced system name such as `.z.ts`.
    #[inline]
    pub fn is_system_name(self) -> bool {
        let v = self as u16;
        v >= TokenKind::FIRST_SYSTEM_NAME as u16 && v <= TokenKind::LAST_SYSTEM_NAME as u16
    }

    /// Whether this kind represents an operator.
    #[inline]
    pub fn is_operator(self) -> bool {
        let v = self as u16;
        v >= TokenKind::FIRST_OPERATOR as u16 && v <= TokenKind::LAST_OPERATOR as u16
    }

    /// Whether this kind represents a compound assignment such as `+=` or `exp=`.
    #[inline]
    pub fn is_compound_assignment(self) -> bool {
        let v = self as u16;
        v >= TokenKind::FIRST_COMPOUND_ASSIGNMENT as u16
            && v <= TokenKind::LAST_COMPOUND_ASSIGNMENT as u16
    }

    /// Whether this kind has a fixed spelling in [`LITERALS`].
    #[inline]
    pub fn is_fixed(self) -> bool {
        self.is_keyword() || self.is_system_name() || self.is_operator()
    }

    /// The fixed spelling of a keyword, system name or operator.
    pub fn text(self) -> Option<&'static str> {
        if !self.is_fixed() {
            return None;
        }
        LITERALS
            .binary_search_by_key(&(self as u16), |&(_, kind)| kind as u16)
            .ok()
            .map(|idx| LITERALS[idx].0)
    }

    /// The spelling of a single-character punctuation token.
    pub fn punctuation_text(self) -> Option<&'static str> {
        match self {
            TokenKind::OpenParenToken => Some("("),
            TokenKind::CloseParenToken => Some(")"),
            TokenKind::OpenBracketToken => Some("["),
            TokenKind::CloseBracketToken => Some("]"),
            TokenKind::OpenBraceToken => Some("{"),
            TokenKind::CloseBraceToken => Some("}"),
            TokenKind::QuoteToken => Some("'"),
            TokenKind::UnderscoreToken => Some("_"),
            _ => None,
        }
    }

    /// Look up the fixed kind spelled exactly `text`.
    pub fn from_spelling(text: &str) -> Option<TokenKind> {
        LITERALS
            .iter()
            .find(|&&(spelling, _)| spelling == text)
            .map(|&(_, kind)| kind)
    }
}

impl std::fmt::Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}
