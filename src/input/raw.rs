use serde::{Deserialize, Serialize};

use crate::input::loose::{self, first_non_empty};
use crate::model::record::{ChannelTag, ScoreRecord};
use crate::model::timestamp::ordering_key;
use crate::model::Person;

/// Records arrive either wrapped in the host's `fieldData` envelope or flat.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum HostShape<T> {
    Wrapped {
        #[serde(rename = "fieldData")]
        field_data: T,
    },
    Flat(T),
}

impl<T> HostShape<T> {
    pub fn into_inner(self) -> T {
        match self {
            HostShape::Wrapped { field_data } => field_data,
            HostShape::Flat(inner) => inner,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct RawItem {
    #[serde(rename = "Type", default, deserialize_with = "loose::string")]
    pub kind: Option<String>,
    #[serde(rename = "Header", default, deserialize_with = "loose::string")]
    pub header: Option<String>,
    #[serde(rename = "Subheader", default, deserialize_with = "loose::string")]
    pub subheader: Option<String>,
    #[serde(rename = "Question", default, deserialize_with = "loose::string")]
    pub question: Option<String>,
    #[serde(rename = "HeaderInstruction", default, deserialize_with = "loose::string")]
    pub header_instruction: Option<String>,
    #[serde(rename = "Option1", default, deserialize_with = "loose::string")]
    pub option1: Option<String>,
    #[serde(rename = "Option2", default, deserialize_with = "loose::string")]
    pub option2: Option<String>,
    #[serde(rename = "Option3", default, deserialize_with = "loose::string")]
    pub option3: Option<String>,
    #[serde(rename = "Option4", default, deserialize_with = "loose::string")]
    pub option4: Option<String>,
    #[serde(rename = "OptionDescription1", default, deserialize_with = "loose::string")]
    pub option_description1: Option<String>,
    #[serde(rename = "OptionDescription2", default, deserialize_with = "loose::string")]
    pub option_description2: Option<String>,
    #[serde(rename = "OptionDescription3", default, deserialize_with = "loose::string")]
    pub option_description3: Option<String>,
    #[serde(rename = "OptionDescription4", default, deserialize_with = "loose::string")]
    pub option_description4: Option<String>,
    #[serde(rename = "StatusOptions", default, deserialize_with = "loose::string_list")]
    pub status_options: Vec<String>,
    #[serde(rename = "MeetsStandardOptions", default, deserialize_with = "loose::string_list")]
    pub meets_standard_options: Vec<String>,
}

impl RawItem {
    pub fn option_slots(&self) -> [(&Option<String>, &Option<String>); 4] {
        [
            (&self.option1, &self.option_description1),
            (&self.option2, &self.option_description2),
            (&self.option3, &self.option_description3),
            (&self.option4, &self.option_description4),
        ]
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct RawPerson {
    #[serde(default, deserialize_with = "loose::string")]
    pub contact: Option<String>,
    #[serde(default, deserialize_with = "loose::string")]
    pub contact_id: Option<String>,
}

impl RawPerson {
    pub fn into_person(self) -> Option<Person> {
        let id = self.contact_id.filter(|id| !id.is_empty())?;
        Some(Person::new(id, self.contact.unwrap_or_default()))
    }
}

/// Every field name a score record has carried across host layouts.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct RawScore {
    #[serde(rename = "Skill_ID", default, deserialize_with = "loose::string")]
    pub skill_id_legacy: Option<String>,
    #[serde(rename = "skillId", default, deserialize_with = "loose::string")]
    pub skill_id: Option<String>,
    #[serde(rename = "Contact_ID", default, deserialize_with = "loose::string")]
    pub contact_id_legacy: Option<String>,
    #[serde(rename = "contact_id", default, deserialize_with = "loose::string")]
    pub contact_id: Option<String>,
    #[serde(rename = "Data", default, deserialize_with = "loose::string")]
    pub data: Option<String>,
    #[serde(rename = "Score", default, deserialize_with = "loose::string")]
    pub score: Option<String>,
    #[serde(rename = "pass", default, deserialize_with = "loose::flag")]
    pub pass: Option<bool>,
    #[serde(rename = "Pass", default, deserialize_with = "loose::flag")]
    pub pass_legacy: Option<bool>,
    #[serde(default, deserialize_with = "loose::string")]
    pub user: Option<String>,
    #[serde(rename = "userType", default, deserialize_with = "loose::string")]
    pub user_type: Option<String>,
    #[serde(default, deserialize_with = "loose::string")]
    pub date: Option<String>,
    #[serde(rename = "EditableDate", default, deserialize_with = "loose::string")]
    pub editable_date: Option<String>,
    #[serde(rename = "LastUpdated", default, deserialize_with = "loose::string")]
    pub last_updated: Option<String>,
    #[serde(rename = "Author", default, deserialize_with = "loose::string")]
    pub author_legacy: Option<String>,
    #[serde(rename = "zzCreatedAcct", default, deserialize_with = "loose::string")]
    pub created_account: Option<String>,
    #[serde(rename = "zzCreatedName", default, deserialize_with = "loose::string")]
    pub created_name: Option<String>,
    #[serde(rename = "zzCreatedTimestamp", default, deserialize_with = "loose::string")]
    pub created_timestamp: Option<String>,
}

impl RawScore {
    /// Resolves the legacy field variants once. Records that cannot be joined
    /// to an item and a person are dropped.
    pub fn into_record(self) -> Option<ScoreRecord> {
        let item_id = first_non_empty(&[&self.skill_id_legacy, &self.skill_id])?;
        let person_id = first_non_empty(&[&self.contact_id_legacy, &self.contact_id])?;
        let value = first_non_empty(&[&self.data]).or(self.score);
        let created_timestamp = first_non_empty(&[&self.created_timestamp]);
        Some(ScoreRecord {
            item_id,
            person_id,
            channel: ChannelTag::from_raw(self.user_type.as_deref()),
            value,
            pass: self.pass.or(self.pass_legacy).unwrap_or(false),
            author: first_non_empty(&[&self.user]),
            account: first_non_empty(&[&self.created_account, &self.author_legacy]),
            created_name: first_non_empty(&[&self.created_name]),
            date: first_non_empty(&[&self.date, &self.editable_date, &self.last_updated]),
            recorded_at: ordering_key(created_timestamp.as_deref()),
            created_timestamp,
        })
    }
}

/// Host layout used when handing the working record list back.
#[derive(Debug, Clone, Serialize)]
pub struct HostScore<'a> {
    #[serde(rename = "fieldData")]
    pub field_data: HostScoreFields<'a>,
}

#[derive(Debug, Clone, Serialize)]
pub struct HostScoreFields<'a> {
    #[serde(rename = "Skill_ID")]
    pub skill_id: &'a str,
    #[serde(rename = "Contact_ID")]
    pub contact_id: &'a str,
    #[serde(rename = "Data", skip_serializing_if = "Option::is_none")]
    pub data: Option<&'a str>,
    pub pass: u8,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user: Option<&'a str>,
    #[serde(rename = "userType", skip_serializing_if = "Option::is_none")]
    pub user_type: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<&'a str>,
    #[serde(rename = "zzCreatedAcct", skip_serializing_if = "Option::is_none")]
    pub created_account: Option<&'a str>,
    #[serde(rename = "zzCreatedName", skip_serializing_if = "Option::is_none")]
    pub created_name: Option<&'a str>,
    #[serde(rename = "zzCreatedTimestamp", skip_serializing_if = "Option::is_none")]
    pub created_timestamp: Option<&'a str>,
}

impl<'a> From<&'a ScoreRecord> for HostScore<'a> {
    fn from(record: &'a ScoreRecord) -> Self {
        HostScore {
            field_data: HostScoreFields {
                skill_id: &record.item_id,
                contact_id: &record.person_id,
                data: record.value.as_deref(),
                pass: u8::from(record.pass),
                user: record.author.as_deref(),
                user_type: record.channel.as_label(),
                date: record.date.as_deref(),
                created_account: record.account.as_deref(),
                created_name: record.created_name.as_deref(),
                created_timestamp: record.created_timestamp.as_deref(),
            },
        }
    }
}
