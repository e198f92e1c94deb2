use std::collections::{BTreeMap, HashMap};

use kw_json::{JsonCodec, NamingRule};
use kw_reflect::derive::Reflect;
use kw_reflect::impl_reflect_opaque;
use serde_core::de::DeserializeSeed;

#[derive(serde::Serialize, serde::Deserialize, Default, Debug, Clone, PartialEq)]
struct Rgb(u8, u8, u8);

impl_reflect_opaque!(Rgb);

#[derive(Reflect, Default, Debug, Clone, PartialEq)]
struct Member {
    #[tag(json = "Handle")]
    pub handle: String,
    #[tag(toJson = "-")]
    pub password: String,
    pub color: Rgb,
}

#[derive(Reflect, Default, Debug, PartialEq)]
struct Team {
    pub name: String,
    pub members: Vec<Member>,
    pub lead: Option<Member>,
    pub by_role: BTreeMap<String, Member>,
    pub scores: HashMap<String, u32>,
}

fn team() -> Team {
    let member = |handle: &str| Member {
        handle: handle.into(),
        password: "pw".into(),
        color: Rgb(1, 2, 3),
    };
    Team {
        name: "core".into(),
        members: vec![member("ann"), member("bob")],
        lead: Some(member("ann")),
        by_role: BTreeMap::from([("reviewer".into(), member("bob"))]),
        scores: HashMap::from([("z".into(), 1), ("a".into(), 2)]),
    }
}

#[test]
fn nested_structs_use_the_same_codec() {
    let codec = JsonCodec::new();
    codec.set_naming_rule(NamingRule::new(|name| name.to_uppercase()));

    let text = codec.marshal_to_string(&team()).unwrap();
    assert_eq!(
        text,
        concat!(
            r#"{"NAME":"core","#,
            r#""MEMBERS":[{"Handle":"ann","COLOR":[1,2,3]},{"Handle":"bob","COLOR":[1,2,3]}],"#,
            r#""LEAD":{"Handle":"ann","COLOR":[1,2,3]},"#,
            r#""BY_ROLE":{"reviewer":{"Handle":"bob","COLOR":[1,2,3]}},"#,
            r#""SCORES":{"a":2,"z":1}}"#,
        )
    );
}

#[test]
fn containers_are_replaced_on_decode() {
    let codec = JsonCodec::new();
    let mut target = team();

    codec
        .unmarshal_str(
            r#"{
                "members": [{"Handle": "cid", "password": "x", "color": [9, 9, 9]}],
                "lead": null,
                "by_role": {},
                "scores": {"q": 7}
            }"#,
            &mut target,
        )
        .unwrap();

    assert_eq!(target.name, "core");
    assert_eq!(target.members.len(), 1);
    assert_eq!(target.members[0].handle, "cid");
    assert_eq!(target.members[0].password, "x");
    assert_eq!(target.members[0].color, Rgb(9, 9, 9));
    assert_eq!(target.lead, None);
    assert!(target.by_role.is_empty());
    assert_eq!(target.scores, HashMap::from([("q".into(), 7)]));
}

#[test]
fn some_decodes_into_the_existing_value() {
    let codec = JsonCodec::new();
    let mut target = Team::default();
    codec
        .unmarshal_str(r#"{"lead":{"Handle":"dee"}}"#, &mut target)
        .unwrap();
    let lead = target.lead.as_ref().unwrap();
    assert_eq!(lead.handle, "dee");
    assert_eq!(lead.color, Rgb::default());

    codec
        .unmarshal_str(r#"{"lead":{"password":"p"}}"#, &mut target)
        .unwrap();
    let lead = target.lead.unwrap();
    assert_eq!(lead.handle, "dee");
    assert_eq!(lead.password, "p");
}

#[test]
fn null_clears_containers_and_keeps_other_values() {
    let codec = JsonCodec::new();
    let mut target = team();

    codec
        .unmarshal_str(
            r#"{"name":null,"members":null,"lead":null,"by_role":null,"scores":null}"#,
            &mut target,
        )
        .unwrap();

    assert_eq!(target.name, "core");
    assert!(target.members.is_empty());
    assert_eq!(target.lead, None);
    assert!(target.by_role.is_empty());
    assert!(target.scores.is_empty());
}

#[test]
fn null_inside_nested_values() {
    let codec = JsonCodec::new();
    let mut target = team();

    codec
        .unmarshal_str(
            r#"{"members":[{"Handle":null,"color":null},null],"lead":{"Handle":null}}"#,
            &mut target,
        )
        .unwrap();

    assert_eq!(target.members, vec![Member::default(), Member::default()]);
    assert_eq!(target.lead.as_ref().unwrap().handle, "ann");

    let before = team();
    let mut whole = team();
    codec.unmarshal_str("null", &mut whole).unwrap();
    assert_eq!(whole, before);
}

#[test]
fn seed_rejects_null_unless_lenient() {
    let codec = JsonCodec::new();
    let mut member = Member::default();

    let mut input = serde_json::Deserializer::from_str(r#"{"Handle":null}"#);
    assert!(codec.deserializer_seed(&mut member).deserialize(&mut input).is_err());

    let mut input = serde_json::Deserializer::from_str(r#"{"Handle":null,"password":"p"}"#);
    codec
        .deserializer_seed(&mut member)
        .lenient_null(true)
        .deserialize(&mut input)
        .unwrap();
    assert_eq!(member.password, "p");
}

#[test]
fn repeated_keys_keep_the_last_value() {
    let codec = JsonCodec::new();
    let mut member = Member::default();
    codec
        .unmarshal_str(r#"{"Handle":"a","Handle":"b"}"#, &mut member)
        .unwrap();
    assert_eq!(member.handle, "b");
}

#[test]
fn pretty_output_is_indented() {
    let member = Member {
        handle: "ann".into(),
        ..Default::default()
    };
    let bytes = JsonCodec::new().marshal_pretty(&member).unwrap();
    let text = String::from_utf8(bytes).unwrap();
    assert_eq!(
        text,
        "{\n  \"Handle\": \"ann\",\n  \"color\": [\n    0,\n    0,\n    0\n  ]\n}"
    );
    assert_eq!(kw_json::marshal_pretty(&member).unwrap(), text.as_bytes());
}

#[test]
fn engine_errors_pass_through() {
    let codec = JsonCodec::new();
    let mut member = Member::default();

    let err = codec.unmarshal_str(r#"{"Handle":5}"#, &mut member).unwrap_err();
    let kw_json::DecodeError::Json(inner) = &err;
    assert!(inner.is_data());

    let err = codec.unmarshal_str(r#"{"Handle":"a""#, &mut member).unwrap_err();
    let kw_json::DecodeError::Json(inner) = &err;
    assert!(inner.is_eof());

    let err = codec.unmarshal_str(r#"{"Handle":"a"} trailing"#, &mut member).unwrap_err();
    let kw_json::DecodeError::Json(inner) = &err;
    assert!(inner.is_syntax());

    let err = kw_json::unmarshal(b"[1]", &mut member).unwrap_err();
    assert!(err.to_string().contains("a map for struct"));
}

#[test]
fn drivers_work_with_other_formats() {
    let codec = JsonCodec::new();
    let value = team();

    let text = ron::to_string(&codec.serializer(&value)).unwrap();

    let mut back = Team::default();
    let mut deserializer = ron::Deserializer::from_str(&text).unwrap();
    codec
        .deserializer_seed(&mut back)
        .deserialize(&mut deserializer)
        .unwrap();

    let expected = Team {
        members: value
            .members
            .iter()
            .cloned()
            .map(|m| Member {
                password: String::new(),
                ..m
            })
            .collect(),
        lead: value.lead.clone().map(|m| Member {
            password: String::new(),
            ..m
        }),
        by_role: value
            .by_role
            .iter()
            .map(|(k, m)| {
                let m = Member {
                    password: String::new(),
                    ..m.clone()
                };
                (k.clone(), m)
            })
            .collect(),
        ..team()
    };
    assert_eq!(back, expected);
}
