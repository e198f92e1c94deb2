#![allow(non_snake_case)]

use std::sync::Arc;

use kw_json::{Direction, ExposedKey, JsonCodec, NamingRule};
use kw_reflect::derive::Reflect;

#[derive(Reflect, Default, Debug, Clone, PartialEq)]
struct Person {
    #[tag(json = "_id")]
    pub Id: String,
    pub Age: i32,
    #[tag(json = "-", originalJson = "firstName")]
    pub FirstName: String,
    #[tag(json = "-", originalJson = "lastName")]
    pub LastName: String,
    #[tag(json = "-", integratedJson = "name")]
    pub Name: String,
    #[tag(json = "secret", toJson = "-")]
    pub Secret: String,
    pub Bio: String,
    #[tag(toJson = "-")]
    pub Signature: String,
}

impl Person {
    fn normalize(&mut self) {
        self.Name = format!("{} {}", self.FirstName, self.LastName);
        if self.Bio.is_empty() {
            self.Bio = self.Signature.clone();
        }
    }
}

const PERSON_JSON: &str = r#"{"_id":"No.1","age":8,"firstName":"Tom","lastName":"Sawyer","secret":"Hola everyone, I am alive!","signature":"Bye, have a good day!"}"#;

fn view(custom_tag: &str) -> JsonCodec {
    let codec = JsonCodec::new();
    codec
        .set_custom_tag(custom_tag)
        .set_naming_rule(NamingRule::lower_initial());
    codec
}

fn decoded_person() -> Person {
    let mut person = Person::default();
    view("originalJson").must_unmarshal(PERSON_JSON.as_bytes(), &mut person);
    person.normalize();
    person
}

#[test]
fn decode_uses_the_configured_view() {
    let person = decoded_person();
    assert_eq!(person.Id, "No.1");
    assert_eq!(person.Age, 8);
    assert_eq!(person.FirstName, "Tom");
    assert_eq!(person.LastName, "Sawyer");
    assert_eq!(person.Secret, "Hola everyone, I am alive!");
    assert_eq!(person.Signature, "Bye, have a good day!");
    assert_eq!(person.Bio, "Bye, have a good day!");
}

#[test]
fn each_codec_encodes_its_own_view() {
    let person = decoded_person();

    let original = view("originalJson").marshal_to_string(&person).unwrap();
    assert_eq!(
        original,
        r#"{"_id":"No.1","age":8,"firstName":"Tom","lastName":"Sawyer","bio":"Bye, have a good day!"}"#
    );

    let integrated = view("integratedJson").marshal_to_string(&person).unwrap();
    assert_eq!(
        integrated,
        r#"{"_id":"No.1","age":8,"name":"Tom Sawyer","bio":"Bye, have a good day!"}"#
    );

    let optimized = view("").marshal_to_string(&person).unwrap();
    assert_eq!(optimized, r#"{"_id":"No.1","age":8,"bio":"Bye, have a good day!"}"#);

    let plain = JsonCodec::new().marshal_to_string(&person).unwrap();
    assert_eq!(plain, r#"{"_id":"No.1","Age":8,"Bio":"Bye, have a good day!"}"#);
}

#[test]
fn global_codec_matches_a_fresh_default() {
    let person = decoded_person();
    let global = kw_json::marshal(&person).unwrap();
    assert_eq!(global, JsonCodec::new().marshal(&person).unwrap());
}

#[test]
fn suppressed_field_still_decodes() {
    let codec = JsonCodec::new();
    let mut person = Person::default();
    codec
        .unmarshal_str(r#"{"secret":"s3cret","Signature":"bye"}"#, &mut person)
        .unwrap();
    assert_eq!(person.Secret, "s3cret");
    assert_eq!(person.Signature, "bye");

    let text = codec.marshal_to_string(&person).unwrap();
    assert!(!text.contains("s3cret"));
    assert!(!text.contains("bye"));
}

#[test]
fn decode_annotation_and_naming_rule() {
    #[derive(Reflect, Default)]
    struct Name {
        #[tag(fromJson = "lastName")]
        pub LastName: String,
    }

    let codec = JsonCodec::new();
    codec.set_naming_rule(NamingRule::lower_initial());

    let decode = codec.decode_plan::<Name>().unwrap();
    let encode = codec.encode_plan::<Name>().unwrap();
    assert_eq!(decode.decisions()[0].key(), &ExposedKey::Key("lastName".into()));
    assert_eq!(encode.decisions()[0].key(), &ExposedKey::Key("lastName".into()));
}

#[test]
fn default_tag_differs_between_codecs() {
    #[derive(Reflect, Default)]
    struct Entry {
        #[tag(json = "k", bson = "key")]
        pub Key: String,
    }

    let json = JsonCodec::new();
    let bson = JsonCodec::new();
    bson.set_default_tag("bson");

    let entry = Entry { Key: "v".into() };
    assert_eq!(json.marshal_to_string(&entry).unwrap(), r#"{"k":"v"}"#);
    assert_eq!(bson.marshal_to_string(&entry).unwrap(), r#"{"key":"v"}"#);

    bson.disable_default_tag();
    assert_eq!(bson.marshal_to_string(&entry).unwrap(), r#"{"Key":"v"}"#);
    assert_eq!(json.marshal_to_string(&entry).unwrap(), r#"{"k":"v"}"#);
}

#[test]
fn reconfiguring_never_serves_stale_plans() {
    let codec = JsonCodec::new();
    let person = decoded_person();

    let before = codec.marshal_to_string(&person).unwrap();
    assert!(before.contains("\"Age\""));
    let cached = codec.encode_plan::<Person>().unwrap();

    codec.set_naming_rule(NamingRule::lower_initial());
    let after = codec.marshal_to_string(&person).unwrap();
    assert!(after.contains("\"age\""));
    assert!(!Arc::ptr_eq(&cached, &codec.encode_plan::<Person>().unwrap()));

    codec.set_encode_and_decode_tags("", "");
    let mut reread = Person::default();
    codec
        .unmarshal_str(r#"{"secret":"visible now","signature":"x"}"#, &mut reread)
        .unwrap();
    assert_eq!(reread.Secret, "visible now");
    assert_eq!(reread.Signature, "x");
    let text = codec.marshal_to_string(&reread).unwrap();
    assert!(!text.contains("visible now"), "the suppress tag still applies");
    assert!(!text.contains("\"signature\""));

    codec.set_suppress_tag("");
    let text = codec.marshal_to_string(&reread).unwrap();
    assert!(text.contains("\"secret\":\"visible now\""));
    assert!(text.contains("\"signature\":\"x\""));
}

#[test]
fn other_codecs_keep_their_caches() {
    let a = JsonCodec::new();
    let b = JsonCodec::new();
    let plan_a = a.encode_plan::<Person>().unwrap();
    let plan_b = b.encode_plan::<Person>().unwrap();
    assert!(!Arc::ptr_eq(&plan_a, &plan_b));

    b.set_custom_tag("originalJson");
    assert_eq!(b.cached_plans(Direction::Encode), 0);
    assert_eq!(a.cached_plans(Direction::Encode), 1);
    assert!(Arc::ptr_eq(&plan_a, &a.encode_plan::<Person>().unwrap()));
}

#[test]
fn round_trip_without_exclusions() {
    #[derive(Reflect, Default, Debug, PartialEq)]
    struct Point {
        #[tag(json = "X")]
        pub x: i64,
        #[tag(fromJson = "why", toJson = "why")]
        pub y: i64,
        pub label: String,
    }

    let codec = JsonCodec::new();
    let value = Point {
        x: -4,
        y: 9,
        label: "p".into(),
    };
    let bytes = codec.marshal(&value).unwrap();
    assert_eq!(bytes, br#"{"X":-4,"why":9,"label":"p"}"#);

    let mut back = Point::default();
    codec.unmarshal(&bytes, &mut back).unwrap();
    assert_eq!(back, value);
}

#[test]
fn colliding_keys_are_written_once() {
    #[derive(Reflect, Default, Debug, PartialEq)]
    struct Clash {
        #[tag(json = "v")]
        pub first: u8,
        #[tag(json = "v")]
        pub second: u8,
    }

    let codec = JsonCodec::new();
    let text = codec
        .marshal_to_string(&Clash { first: 1, second: 2 })
        .unwrap();
    assert_eq!(text, r#"{"v":1}"#);

    let mut back = Clash { first: 0, second: 9 };
    codec.unmarshal_str(&text, &mut back).unwrap();
    assert_eq!(back, Clash { first: 1, second: 9 });
}

#[test]
fn exclusion_marker_is_never_a_key() {
    #[derive(Reflect, Default)]
    struct Dash {
        #[tag(json = "-")]
        pub hidden: u8,
    }

    let codec = JsonCodec::new();
    let mut dash = Dash { hidden: 3 };
    codec.unmarshal_str(r#"{"-":9,"hidden":9}"#, &mut dash).unwrap();
    assert_eq!(dash.hidden, 3);
    assert_eq!(codec.marshal_to_string(&dash).unwrap(), "{}");
}
