use base64::engine::general_purpose::STANDARD_NO_PAD;
use proptest::prelude::*;
use ygo_deck_codec::{
    Deck, DeckCodec, DeckCodecs, DeckError, DeckFormat, DecodeSupport, EncodeSupport, Fidelity,
    UntappedCodec, YdkCodec, YdkeCodec, Zone,
};

const ASH_BLOSSOM: u32 = 14558127;
const DARK_MAGICIAN: u32 = 46986414;
const BLUE_EYES: u32 = 89631139;
const DRAGON_SHRINE: u32 = 41620959;
const ACCESSCODE: u32 = 86066372;

/// main=[89631139, 89631139, 23434538], extra=[44508094], side=[14558127, 14558127]
const SAMPLE_YDKE: &str = "ydke://o6lXBaOpVwUqlWUB!viOnAg==!ryPeAK8j3gA=!";

fn ydke() -> YdkeCodec {
    YdkeCodec::default()
}

fn untapped() -> UntappedCodec {
    UntappedCodec::default()
}

fn codecs() -> DeckCodecs {
    DeckCodecs::default()
}

fn sample_deck() -> Deck {
    Deck::new(
        vec![BLUE_EYES, BLUE_EYES, 23434538],
        vec![44508094],
        Some(vec![ASH_BLOSSOM, ASH_BLOSSOM]),
    )
}

// ---------------------------------------------------------------------------
// ydk
// ---------------------------------------------------------------------------

#[test]
fn ydk_decodes_minimal_deck_with_default_name() {
    let decoded = YdkCodec.decode("#main\n89631139\n#extra\n").expect("decode ydk");
    assert_eq!(decoded.deck, Deck::new(vec![BLUE_EYES], vec![], None));
    assert_eq!(decoded.name, "YDK Deck");
    assert_eq!(decoded.fidelity, Fidelity::Exact);
}

#[test]
fn ydk_skips_malformed_lines_without_aborting() {
    let input = "#main\n89631139\nabc\n-5\n0\n99999999999\n46986414\n#extra\n 86066372 \n";
    let decoded = YdkCodec.decode(input).expect("decode ydk");
    assert_eq!(
        decoded.deck.main,
        vec![BLUE_EYES, DARK_MAGICIAN],
        "bad tokens must be dropped and later lines still parsed"
    );
    assert_eq!(decoded.deck.extra, vec![ACCESSCODE]);
}

#[test]
fn ydk_reads_leading_digits_of_noisy_lines() {
    let decoded = YdkCodec.decode("#main\n89631139 -- Blue-Eyes\n+46986414\n").expect("decode ydk");
    assert_eq!(decoded.deck.main, vec![BLUE_EYES, DARK_MAGICIAN]);
}

#[test]
fn ydk_captures_only_the_first_name_comment() {
    let input = "#created by someone\n#main\n89631139\n# not a name\n#MAIN\n#extra\n86066372\n";
    let decoded = YdkCodec.decode(input).expect("decode ydk");
    assert_eq!(decoded.name, "created by someone");
    assert_eq!(
        decoded.deck.main,
        vec![BLUE_EYES],
        "unknown directives must not switch zones"
    );
    assert_eq!(decoded.deck.extra, vec![ACCESSCODE]);
}

#[test]
fn ydk_directives_are_case_sensitive() {
    let decoded = YdkCodec.decode("#MAIN\n89631139\n#main\n46986414\n").expect("decode ydk");
    assert_eq!(decoded.name, "MAIN");
    assert_eq!(decoded.deck.main, vec![BLUE_EYES, DARK_MAGICIAN]);
}

#[test]
fn ydk_bare_marker_captures_empty_name() {
    let decoded = YdkCodec.decode("#\n#main\n89631139\n").expect("decode ydk");
    assert_eq!(decoded.name, "");
}

#[test]
fn ydk_handles_crlf_and_byte_order_mark() {
    let input = "\u{feff}#created by YGOPro\r\n#main\r\n89631139\r\n#extra\r\n86066372\r\n!side\r\n14558127\r\n";
    let decoded = YdkCodec.decode(input).expect("decode ydk");
    assert_eq!(decoded.name, "created by YGOPro");
    assert_eq!(
        decoded.deck,
        Deck::new(vec![BLUE_EYES], vec![ACCESSCODE], Some(vec![ASH_BLOSSOM]))
    );
}

#[test]
fn ydk_side_is_absent_unless_it_has_cards() {
    let decoded = YdkCodec.decode("#main\n89631139\n#extra\n!side\n\n").expect("decode ydk");
    assert_eq!(decoded.deck.side, None, "declared but empty side decodes as absent");
}

#[test]
fn ydk_without_content_is_an_empty_deck_not_an_error() {
    let decoded = YdkCodec.decode("").expect("decode empty ydk");
    assert!(decoded.deck.is_failure());
    assert_eq!(decoded.name, "YDK Deck");
}

#[test]
fn ydk_encodes_name_zones_and_declared_side() {
    let deck = Deck::new(vec![BLUE_EYES, 0, DARK_MAGICIAN], vec![ACCESSCODE], Some(vec![]));
    let code = YdkCodec.encode(&deck, "Dragons").expect("encode ydk");
    assert_eq!(
        code,
        "# Dragons\n#main\n89631139\n46986414\n#extra\n86066372\n!side"
    );
}

#[test]
fn ydk_encodes_without_name_or_side() {
    let deck = Deck::new(vec![BLUE_EYES], vec![], None);
    let code = YdkCodec.encode(&deck, "").expect("encode ydk");
    assert_eq!(code, "#main\n89631139\n#extra");
}

// ---------------------------------------------------------------------------
// ydke
// ---------------------------------------------------------------------------

#[test]
fn ydke_decodes_little_endian_segments() {
    let decoded = ydke().decode(SAMPLE_YDKE).expect("decode ydke");
    assert_eq!(decoded.deck, sample_deck());
    assert_eq!(decoded.name, "YDKE Deck");
    assert!(decoded.is_verified());
}

#[test]
fn ydke_reencodes_byte_for_byte() {
    let codec = ydke();
    let decoded = codec.decode(SAMPLE_YDKE).expect("decode ydke");
    let code = codec.encode(&decoded.deck, &decoded.name).expect("encode ydke");
    assert_eq!(code, SAMPLE_YDKE);
}

#[test]
fn ydke_without_segments_yields_parse_error() {
    let codec = ydke();
    let err = codec.decode("ydke://").expect_err("no segments");
    assert!(matches!(err, DeckError::Parse { format: DeckFormat::Ydke }));

    let (deck, name) = codec.decode_or_sentinel("ydke://");
    assert_eq!(deck, Deck::sentinel());
    assert_eq!(name, "error: parse ydke code failed");
}

#[test]
fn ydke_requires_prefix_and_two_segments() {
    let codec = ydke();
    for input in ["", "o6lXBQ==!viOnAg==!!", "YDKE://o6lXBQ==!viOnAg==!!", "ydke://o6lXBQ==!!!"] {
        let (deck, name) = codec.decode_or_sentinel(input);
        assert!(deck.is_failure(), "expected failure for {:?}", input);
        assert_eq!(name, "error: parse ydke code failed", "input {:?}", input);
    }
}

#[test]
fn ydke_empty_third_segment_means_no_side() {
    let decoded = ydke().decode("ydke://o6lXBQ==!viOnAg==!!").expect("decode ydke");
    assert_eq!(decoded.deck, Deck::new(vec![BLUE_EYES], vec![44508094], None));
}

#[test]
fn ydke_segment_scan_stops_at_invalid_character() {
    let decoded = ydke()
        .decode("ydke://o6lXBQ==!viOnAg==!ry*PeAK8j3gA=!")
        .expect("first two segments are enough");
    assert_eq!(decoded.deck.side, None);
}

#[test]
fn ydke_rejects_misaligned_segment() {
    // "AAA=" decodes to two bytes, half a card.
    let err = ydke().decode("ydke://AAA=!viOnAg==!!").expect_err("misaligned");
    match &err {
        DeckError::MisalignedSegment { zone, len, .. } => {
            assert_eq!(*zone, Zone::Main);
            assert_eq!(*len, 2);
        }
        other => panic!("unexpected error {:?}", other),
    }
    assert_eq!(err.sentinel_name(), "error: parse ydke code failed");
}

#[test]
fn ydke_rejects_invalid_base64() {
    let err = ydke().decode("ydke://A!viOnAg==!!").expect_err("invalid base64");
    assert!(matches!(err, DeckError::Base64 { format: DeckFormat::Ydke, .. }));
    assert!(!err.is_unsupported());
}

#[test]
fn ydke_empty_deck_encodes_to_bare_separators() {
    let codec = ydke();
    let code = codec.encode(&Deck::sentinel(), "").expect("encode ydke");
    assert_eq!(code, "ydke://!!!");

    let (deck, _) = codec.decode_or_sentinel(&code);
    assert!(deck.is_empty(), "empty deck must decode back to an empty deck");
}

#[test]
fn ydke_uses_injected_base64_engine() {
    let codec = YdkeCodec::new(STANDARD_NO_PAD);
    let deck = Deck::new(vec![BLUE_EYES], vec![44508094], None);
    let code = codec.encode(&deck, "").expect("encode ydke");
    assert_eq!(code, "ydke://o6lXBQ!viOnAg!!");
    assert_eq!(codec.decode(&code).expect("decode ydke").deck, deck);
}

// ---------------------------------------------------------------------------
// untapped.gg
// ---------------------------------------------------------------------------

#[test]
fn untapped_empty_code_yields_parse_error() {
    let (deck, name) = untapped().decode_or_sentinel(";MyDeck");
    assert_eq!(deck, Deck::sentinel());
    assert_eq!(name, "error: parse untapped.gg code failed");
}

#[test]
fn untapped_decode_is_a_flagged_placeholder() {
    let decoded = untapped().decode("abc;MyDeck").expect("decode untapped");
    assert_eq!(decoded.name, "MyDeck");
    assert_eq!(decoded.deck, Deck::new(vec![BLUE_EYES], vec![], None));
    assert_eq!(decoded.fidelity, Fidelity::BestEffort);
    assert!(!decoded.is_verified());
}

#[test]
fn untapped_name_defaults_only_without_separator() {
    let codec = untapped();
    assert_eq!(codec.decode("abc").expect("no name").name, "Untapped.gg Deck");
    assert_eq!(codec.decode("abc;").expect("empty name").name, "");
    assert_eq!(codec.decode("abc;First;Second").expect("extra pieces").name, "First");
}

#[test]
fn untapped_decodes_loose_base64_to_placeholder() {
    let codec = untapped();
    // Non-zero trailing bits, a dangling character, and a lone character.
    for input in ["abd;MyDeck", "abcde;MyDeck", "a;MyDeck"] {
        let (deck, name) = codec.decode_or_sentinel(input);
        assert_eq!(deck, Deck::new(vec![BLUE_EYES], vec![], None), "input {:?}", input);
        assert_eq!(name, "MyDeck", "input {:?}", input);
    }
}

#[test]
fn untapped_accepts_url_safe_alphabet() {
    assert!(untapped().decode("o6lXBQ-_").is_ok());
}

#[test]
fn untapped_encode_is_unsupported() {
    let codec = untapped();
    let err = codec
        .encode(&sample_deck(), "anything")
        .expect_err("encode must fail");
    assert!(err.is_unsupported());
    assert_eq!(err.sentinel_name(), "error: encode not implemented for untapped.gg");
}

#[test]
fn capabilities_distinguish_real_and_placeholder_codecs() {
    assert!(YdkCodec::CAPABILITIES.is_verified_decode());
    assert!(<YdkeCodec as DeckCodec>::CAPABILITIES.can_encode());

    let caps = <UntappedCodec as DeckCodec>::CAPABILITIES;
    assert_eq!(caps.decode, DecodeSupport::BestEffort);
    assert_eq!(caps.encode, EncodeSupport::Unsupported);
    assert!(!caps.is_verified_decode());

    assert_eq!(DeckFormat::Untapped.capabilities(), caps);
    assert_eq!(DeckFormat::Ydk.capabilities(), YdkCodec::CAPABILITIES);
    assert_eq!(
        DeckFormat::Ydke.capabilities(),
        <YdkeCodec as DeckCodec>::CAPABILITIES
    );
}

// ---------------------------------------------------------------------------
// dispatch
// ---------------------------------------------------------------------------

#[test]
fn sniff_routes_by_shape() {
    assert_eq!(DeckFormat::sniff(SAMPLE_YDKE), DeckFormat::Ydke);
    assert_eq!(DeckFormat::sniff("#created by x\n#main\n1\n"), DeckFormat::Ydk);
    assert_eq!(DeckFormat::sniff("AAAA;Deck"), DeckFormat::Untapped);
    // Known limitation: a ydk file without #main goes to untapped.gg,
    // and an untapped.gg name containing #main goes to ydk.
    assert_eq!(DeckFormat::sniff("#extra\n1\n"), DeckFormat::Untapped);
    assert_eq!(DeckFormat::sniff("AAAA;my #main deck"), DeckFormat::Ydk);
}

#[test]
fn format_names_parse_and_display() {
    for format in DeckFormat::ALL {
        assert_eq!(format.to_string().parse::<DeckFormat>(), Ok(format));
    }
    assert_eq!("Untapped".parse::<DeckFormat>(), Ok(DeckFormat::Untapped));
    assert!("ygopro".parse::<DeckFormat>().is_err());
}

#[test]
fn decode_any_picks_matching_codec() {
    let codecs = codecs();
    let (format, decoded) = codecs.decode_any(SAMPLE_YDKE).expect("decode any");
    assert_eq!(format, DeckFormat::Ydke);
    assert_eq!(decoded.deck, sample_deck());

    let (format, deck, name) = codecs.decode_any_or_sentinel(";Broken");
    assert_eq!(format, DeckFormat::Untapped);
    assert!(deck.is_failure());
    assert_eq!(name, "error: parse untapped.gg code failed");
}

#[test]
fn convert_ydk_to_ydke_and_back() {
    let codecs = codecs();
    let ydk = "#main\n89631139\n89631139\n23434538\n#extra\n44508094\n!side\n14558127\n14558127";

    let converted = codecs.convert(ydk, DeckFormat::Ydke).expect("convert to ydke");
    assert_eq!(converted.source, DeckFormat::Ydk);
    assert_eq!(converted.fidelity, Fidelity::Exact);
    assert_eq!(converted.code, SAMPLE_YDKE);

    let back = codecs.convert(&converted.code, DeckFormat::Ydk).expect("convert to ydk");
    assert_eq!(back.code, format!("# YDKE Deck\n{}", ydk));
}

#[test]
fn convert_rejects_deck_without_main_cards() {
    let codecs = codecs();
    for input in ["#main\n#extra\n", "#main\nnot a card\n#extra\n86066372\n"] {
        let err = codecs
            .convert(input, DeckFormat::Ydke)
            .expect_err("empty main deck must not convert");
        assert!(
            matches!(err, DeckError::EmptyDeck { format: DeckFormat::Ydk }),
            "unexpected error {:?} for {:?}",
            err,
            input
        );
        assert_eq!(err.sentinel_name(), "error: parse ydk code failed");
    }
}

#[test]
fn error_messages_leave_sentinel_prefix_to_sentinel_name() {
    let err = ydke().decode("ydke://").expect_err("no segments");
    assert_eq!(err.to_string(), "failed to parse ydke code");
    assert_eq!(err.sentinel_name(), "error: parse ydke code failed");

    let err = untapped().encode(&sample_deck(), "").expect_err("unsupported");
    assert_eq!(err.to_string(), "encode is not implemented for untapped.gg");
    assert_eq!(err.sentinel_name(), "error: encode not implemented for untapped.gg");
}

#[test]
fn convert_refuses_unsupported_target_before_decoding() {
    let err = codecs()
        .convert("not even a deck", DeckFormat::Untapped)
        .expect_err("untapped.gg cannot be encoded");
    assert!(err.is_unsupported());
    assert_eq!(err.format(), DeckFormat::Untapped);
}

#[test]
fn deck_zone_helpers() {
    let deck = sample_deck();
    assert_eq!(deck.len(), 6);
    assert!(deck.has_side());
    let zones: Vec<Zone> = deck.zones().map(|(zone, _)| zone).collect();
    assert_eq!(zones, vec![Zone::Main, Zone::Extra, Zone::Side]);

    let no_side = Deck::new(vec![DRAGON_SHRINE], vec![], Some(vec![]));
    assert!(!no_side.has_side());
    assert_eq!(no_side.zones().count(), 3);
}

#[test]
fn deck_serializes_without_absent_side() {
    let deck = Deck::new(vec![BLUE_EYES], vec![], None);
    let json = serde_json::to_string(&deck).expect("serialize deck");
    assert_eq!(json, r#"{"main":[89631139],"extra":[]}"#);
    let back: Deck = serde_json::from_str(&json).expect("deserialize deck");
    assert_eq!(back, deck);
}

// ---------------------------------------------------------------------------
// round trips
// ---------------------------------------------------------------------------

fn zone(min: usize) -> impl Strategy<Value = Vec<u32>> {
    prop::collection::vec(1u32..=u32::MAX, min..48)
}

proptest! {
    #[test]
    fn ydke_round_trips_any_deck(
        main in prop::collection::vec(any::<u32>(), 1..64),
        extra in prop::collection::vec(any::<u32>(), 1..16),
        side in prop::option::of(prop::collection::vec(any::<u32>(), 1..16)),
    ) {
        let codec = ydke();
        let deck = Deck::new(main, extra, side);
        let code = codec.encode(&deck, "").expect("encode ydke");
        let decoded = codec.decode(&code).expect("decode ydke");
        prop_assert_eq!(decoded.deck, deck);
    }

    #[test]
    fn ydk_round_trips_deck_and_name(
        main in zone(0),
        extra in zone(0),
        side in prop::option::of(zone(1)),
        name in "[A-Za-z0-9][A-Za-z0-9 _-]{0,20}[A-Za-z0-9]",
    ) {
        let deck = Deck::new(main, extra, side);
        let code = YdkCodec.encode(&deck, &name).expect("encode ydk");
        let decoded = YdkCodec.decode(&code).expect("decode ydk");
        prop_assert_eq!(decoded.deck, deck);
        prop_assert_eq!(decoded.name, name);
    }
}
