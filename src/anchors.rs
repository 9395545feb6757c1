//! anchors.rs
//!
//! Literal labels printed on the long-term-care assessment form. Every
//! extraction in this crate locates its value by position relative to one
//! of these tokens, so they must match the flattened form exactly.
//!
//! Some labels occur more than once in a document (the service-block
//! headers, the welfare-status label); callers disambiguate those by
//! position, never by editing the constants.

// Document gates
pub const LONG_CARE_QUALIFICATION: &str = "長照服務資格";
pub const NOTE: &str = "照會單";

// Normalization
pub const DECORATIVE_GLYPHS: [&str; 2] = ["＊", "※"];
pub const NO_PRINT_PHRASE: &str = "勾選後此區不列印";
pub const BUY_ASSISTIVE: &str = "(購買輔具請另填申請單)";

// Structural markers
pub const ITEM: &str = "項目";
pub const CURRENCY: &str = "元";
pub const CHECK_BOX: &str = "checkbox_checked";
pub const CHECK_GIF: &str = "checkbox_checked.gif";
/// Prefix of a checked box rendered inline in front of its caption.
pub const CHECKED_ICON: &str = "[/lcms/images/icons/checkbox_checked.gif]";
pub const YES: &str = "是";
pub const NO: &str = "否";
pub const NONE: &str = "無";

// Narrative sections
pub const THEME: &str = "主旨";
pub const PLAN_CHANGE_REASON: &str = "計畫異動原因";
pub const PLAN_DESCRIPTION: &str = "計畫簡述";
pub const CASE_WISH: &str = "個案意願";
pub const CARE_PLAN: &str = "照顧計畫";
pub const QUESTION: &str = "照顧問題";
pub const A_UNIT: &str = "A單位";
pub const A_CONTACT: &str = "個管聯絡資訊";
pub const A_QUESTION_LIST: &str = "照顧問題清單";
pub const PLAN_DESTINATION: &str = "計畫目標";
pub const PLAN_EXEC: &str = "執行說明";
pub const OTHER_NOTE: &str = "其他備註";
pub const SEARCH_SERVICE_DETAIL: &str = "查詢服務明細";
pub const A_UNIT_NAME: &str = "單位名稱";
pub const A_CARE_TAKER_NAME: &str = "個管員姓名";
pub const CONTACT_PHONE: &str = "聯絡電話";
pub const E_MAIL: &str = "電子信箱";

// Service blocks, in document order
pub const CARE_PROFESSIONAL_SERVICE_MONTH: &str = "照顧及專業服務(月)";
pub const TRANSPORTATION: &str = "交通接送服務";
pub const ASSISTIVE_SERVICE: &str = "輔具及居家無障礙環境改善服務";
pub const RESPITE_SERVICE_YEAR: &str = "喘息服務(年)";
pub const OTHER: &str = "其他服務";
pub const CASE_MGMT_TAKECARE_PLAN: &str = "個案管理照顧計畫";

// Identity
pub const APPLICATION_DATE: &str = "申請日期";
pub const UNDERTAKER: &str = "承辦人";
pub const PROCESS_TIME: &str = "處理時間";
pub const PHONE: &str = "電話";
pub const NAME: &str = "姓名";
pub const TRADITIONAL_NAME: &str = "原住民傳統姓名";
pub const GENDER: &str = "性別";
pub const BIRTHDAY: &str = "出生日期";
pub const PERSONAL_ID: &str = "身分證字號";
pub const FOREIGN: &str = "外籍";

// Demographics
pub const ABORIGINAL_IDENTITY: &str = "原住民身分";
pub const ABORIGINAL_RACE: &str = "原住民族別";
pub const BMI: &str = "身高體重";
pub const LIVING_SITUATION_Q: &str = "居住狀況(問卷)";
pub const LIVING_SITUATION: &str = "居住狀況";
pub const SKIP_ANSWER: &str = "跳答";
pub const LIVING_PARTNER_Q: &str = "同住者";
pub const REGISTERED_ADDRESS: &str = "戶籍地址";
pub const SERVICE_ADDRESS: &str = "居住地址";
pub const LANGUAGE: &str = "使用語言";
pub const LONG_CARE_STATUS: &str = "福利身分";
pub const PLAN_CATEGORY: &str = "計畫類型";
pub const LONG_CARE_LEVEL: &str = "長照等級";
pub const EMPLOYMENT: &str = "就業狀況";
pub const EMPLOYMENT_INTENTION: &str = "就業意願";
pub const CURRENT_LIVING_INSTITUTION: &str = "目前居住機構";
pub const HOSPITALIZED: &str = "住院狀況";
pub const HIRE_CARE: &str = "聘僱看護";
pub const HIRE_CARE_NUM: &str = "聘僱人數";
pub const DISEASE: &str = "特定疾病";
pub const SERVICE_ITEM: &str = "申請服務項目";

// Disability
pub const HANDICAP: &str = "身心障礙類別";
pub const AGE: &str = "高齡";
pub const HANDICAP_LEVEL: &str = "障礙等級";
pub const VALID_DATE: &str = "有效日期";
pub const DISABILITY_PROVE: &str = "身心障礙證明";
pub const BARRIER_CATEGORY_DESCRIPTION: &str = "障礙類別說明";
pub const BARRIER_CATEGORY_NEW: &str = "新制障礙類別";
pub const BARRIER_CATEGORY_OLD: &str = "舊制障礙類別";
pub const NEW_SYSTEM: &str = "新制";
pub const OLD_SYSTEM: &str = "舊制";
pub const MULTIPLE_OBSTACLES: &str = "多重障礙";
pub const ICF: &str = "第";
pub const CATEGORY: &str = "類";
pub const APPRAISAL_DATE: &str = "鑑定日期";
pub const NORMAL: &str = "一般";
pub const MENTAL_DISORDER: &str = "精神障礙";

// Designated agent
pub const AGENT_NAME: &str = "代理人姓名";
pub const AGENT_PERSONAL_ID: &str = "代理人身分證字號";
pub const AGENT_PHONE_H: &str = "代理人電話(H)";
pub const AGENT_PHONE_O: &str = "代理人電話(O)";
pub const AGENT_MOBILE: &str = "代理人手機";
pub const AGENT_RELATION: &str = "代理人關係";
pub const AGENT_EMAIL: &str = "代理人電子郵件";
pub const AGENT_ADDRESS: &str = "代理人地址";

// Emergency contact
pub const CONTACT_NAME: &str = "聯絡人姓名";
pub const CONTACT_PHONE_H: &str = "聯絡人電話(H)";
pub const CONTACT_PHONE_O: &str = "聯絡人電話(O)";
pub const CONTACT_MOBILE: &str = "聯絡人手機";
pub const CONTACT_RELATION: &str = "聯絡人關係";
pub const CONTACT_EMAIL: &str = "聯絡人電子郵件";
pub const CONTACT_ADDRESS: &str = "聯絡人地址";

// Plan meta
pub const EDUCATION: &str = "教育程度";
pub const WRITE_OFF: &str = "核銷方式";
pub const EVALUATE_DATE: &str = "評估日期";
pub const IS_DISABILITY_PROVE: &str = "(是否持有身障證明)";
pub const A_CARE_TAKER_SERVICE: &str = "A個管服務";
pub const CMS_LEVEL: &str = "CMS等級";
pub const ENABLE: &str = "啟用";
pub const NON_ENABLE: &str = "未啟用";
pub const CARE_PROFESSIONAL_SERVICE: &str = "照顧及專業服務";
pub const RESPITE_SERVICE: &str = "喘息服務";
pub const QUOTA_PREFIX: &str = "給付額度";
pub const PRICE_CATEGORY: &str = "價格類型";
pub const ALLOWANCE: &str = "外籍看護津貼";
pub const INTERFACE_NOTE: &str = "介接備註";
pub const UPLOAD_PICTURE: &str = "上傳圖片";

// Signatures
pub const SIGN_SUPERVISOR_ONE: &str = "督導簽核(一)";
pub const SIGN_SUPERVISOR_TWO: &str = "督導簽核(二)";
pub const APPROVAL_STATUS: &str = "簽核狀態";
pub const APPROVAL_DATE: &str = "簽核日期";
pub const APPROVAL_CONTENT: &str = "簽核內容";

// Caregivers
pub const HELPER_PRIMARY_NAME: &str = "主要照顧者姓名";
pub const HELPER_PRIMARY_RELATION: &str = "主要照顧者關係";
pub const HELPER_PRIMARY_GENDER: &str = "主要照顧者性別";
pub const HELPER_PRIMARY_AGE: &str = "主要照顧者年齡";
pub const HELPER_SECONDARY_NAME: &str = "次要照顧者姓名";
pub const HELPER_SECONDARY_RELATION: &str = "次要照顧者關係";

// Behavior, history and special marks
pub const LANGUAGE_ATTACK: &str = "言語攻擊";
pub const PHYSICAL_ATTACK: &str = "肢體攻擊";
pub const RESIST_CARE: &str = "抗拒照護";
pub const ITEM_ATTACK: &str = "破壞物品";
pub const HAPPENED: &str = "有發生";
pub const DEMENTIA: &str = "失智症";
pub const MENTAL_ILLNESS: &str = "精神疾病";
pub const AUTISM: &str = "自閉症";
pub const LOW_INTELLIGENCE: &str = "智能障礙";
pub const CEREBRAL_PALSY: &str = "腦性麻痺";
pub const SPINAL_CORD_INJURY: &str = "脊髓損傷";
pub const INFECTIOUS_DISEASE: &str = "法定傳染病";
pub const RARE_DISEASE: &str = "罕見疾病";
pub const WITH_TUBE: &str = "管路";
pub const MOVE_DIFFICULT: &str = "行動困難";
pub const SIT_UP_ON_HIS_OWN: &str = "可自行坐起";
pub const FULL_ASSISTANCE: &str = "完全依賴";

// Case-management default items
pub const CONFORM: &str = "符合";
pub const AA05: &str = "AA05";
pub const AA06: &str = "AA06";
pub const AA07: &str = "AA07";
pub const ITEM_TYPE_A: &str = "A";
pub const BA12_USE: &str = "AA06含BA12";

// Activities of daily living
pub const E1: &str = "進食";
pub const E2: &str = "洗澡";
pub const E3: &str = "個人衛生";
pub const E4: &str = "穿脫衣物";
pub const E5: &str = "大便控制";
pub const E6: &str = "小便控制";
pub const E7: &str = "上廁所";
pub const MOVEMENT: &str = "移位";
pub const E9: &str = "走路";
pub const E10: &str = "上下樓梯";
pub const E11: &str = "日常活動總分";
/// Section header that follows the last ADL row.
pub const F: &str = "工具性日常生活活動";

// Instrumental activities of daily living
pub const F1: &str = "使用電話";
pub const F2: &str = "購物";
pub const F3: &str = "備餐";
pub const F4: &str = "處理家務";
pub const F5: &str = "洗衣服";
pub const F6: &str = "外出";
pub const F7: &str = "服用藥物";
pub const F8: &str = "處理財務";

// Discharge planning
pub const DISCHARGE_HOSPITAL: &str = "出院準備醫院";
pub const NO_WILLINGNESS: &str = "無意願";
