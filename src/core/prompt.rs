/// Question sent to the language model for every selected business.
///
/// `{name}` and `{address}` each appear once; the reply is requested as a
/// JSON object in the shape of [`crate::domain::model::AccessInfo`].
pub const ACCESS_PROMPT_TEMPLATE: &str = r#"האם יש מידע כלשהו על נגישות לנכים עבור המקום הבא: 
שם העסק: {name}
כתובת: {address}

אם כן, פרט את כל המידע הידוע על נגישות עבור אנשים עם מוגבלויות פיזיות – כמו:
- כניסה נגישה (כיסא גלגלים, רמפה וכו')
- שירותים נגישים
- חניות נכים
- מעליות נגישות
- שילוט מונגש
- כל פרט רלוונטי אחר

השב בעברית בתור אובייקט JSON בפורמט הבא:

{
  "businessName": "שם העסק",
  "address": "כתובת מלאה",
  "isWheelchairAccessible": true | false,
  "hasAccessibleRestrooms": true | false,
  "hasAccessibleParking": true | false,
  "hasElevator": true | false,
  "hasBrailleSigns": true | false,
  "comments": "הערות כלליות על הנגישות (אם יש)"
}
"#;

pub fn populate_prompt(name: &str, address: &str) -> String {
    // Only the first occurrence of each placeholder is replaced, name first.
    ACCESS_PROMPT_TEMPLATE
        .replacen("{name}", name, 1)
        .replacen("{address}", address, 1)
}
