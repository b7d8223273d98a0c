//! Stored procedure names
//!
//! 与数据库中的过程名一一对应

// Auth
pub const USER_CREATE_BY_EMAIL: &str = "usp_User_CreateByEmail";
pub const USER_GET_BY_EMAIL: &str = "usp_User_GetByEmail";

// Picking
pub const PICK_START_SESSION: &str = "usp_Pick_StartSession";
pub const PICK_ADD_SCAN: &str = "usp_Pick_AddScan";
pub const PICK_GET_RECENT_SCANS: &str = "usp_Pick_GetRecentScans";
pub const PICK_COMPLETE: &str = "usp_Pick_Complete";

// Staging (pick → pack)
pub const PICK_STAGE_FOR_PACK: &str = "usp_Pick_StageForPack";
pub const PACK_CLAIM_NEXT: &str = "usp_Pack_ClaimNext";
pub const PACK_GET_STAGED_LINES: &str = "usp_Pack_GetStagedLines";
pub const PACK_CONSUME_STAGING: &str = "usp_Pack_ConsumeStaging";
pub const PACK_RELEASE_STAGING: &str = "usp_Pack_ReleaseStaging";

// Packing
pub const PACK_START_OR_SET: &str = "usp_Pack_StartOrSet";
pub const PACK_ADD_ITEM: &str = "usp_Pack_AddItem";
pub const PACK_GET_ITEMS: &str = "usp_Pack_GetItems";
pub const PACK_UNDO_LAST: &str = "usp_Pack_UndoLast";
pub const PACK_CLEAR: &str = "usp_Pack_Clear";
pub const PACK_SEAL: &str = "usp_Pack_Seal";
pub const PACK_SUMMARY: &str = "usp_Pack_Summary";
pub const PACK_VALIDATE_AGAINST_STAGING: &str = "usp_Pack_ValidateAgainstStaging";

// Delivery
pub const DELIVERY_LIST_PACKAGES: &str = "usp_Delivery_ListPackages";
pub const DELIVERY_GET_PACKAGE_DETAILS: &str = "usp_Delivery_GetPackageDetails";
pub const DELIVERY_MARK_LOADED: &str = "usp_Delivery_MarkLoaded";
pub const DELIVERY_MARK_TO_LOAD: &str = "usp_Delivery_MarkToLoad";
pub const DELIVERY_MARK_DELIVERED: &str = "usp_Delivery_MarkDelivered";
pub const DELIVERY_SCAN_TO_LOAD: &str = "usp_Delivery_ScanToLoad";

// Stock take
pub const STOCK_START_SESSION: &str = "usp_Stock_StartSession";
pub const STOCK_LIST_ITEMS: &str = "usp_Stock_ListItems";
pub const STOCK_ADD_COUNT: &str = "usp_Stock_AddCount";
pub const STOCK_UNDO_LAST: &str = "usp_Stock_UndoLast";
pub const STOCK_FINISH: &str = "usp_Stock_Finish";
