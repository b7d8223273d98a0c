//! 应用层 - 用例编排
//!
//! 包含：
//! - ports: 六边形架构端口定义（ProcedureInvoker、PasswordHasher、TokenService）
//! - commands: CQRS 命令及处理器
//! - queries: CQRS 查询及处理器
//! - rows: 结果行取值工具
//! - procedures: 存储过程名
//! - error: 应用层错误定义

pub mod commands;
pub mod error;
pub mod ports;
pub mod procedures;
pub mod queries;
pub mod rows;

// Re-exports
pub use commands::{
    // Auth commands
    LoginUser,
    RegisterUser,
    // Picking commands
    AddPickScan,
    CompletePick,
    StartPickSession,
    // Staging commands
    ClaimNextStaging,
    ConsumeStaging,
    ReleaseStaging,
    StageFromPick,
    // Packing commands
    AddPackItem,
    ClearPackage,
    SealPackage,
    StartOrSetPackage,
    UndoLastPackItem,
    // Delivery commands
    ScanToLoad,
    UpdatePackageStatus,
    // Stock commands
    AddStockCount,
    FinishStockTake,
    StartStockTake,
    UndoLastStockCount,
    // Handlers
    handlers::{
        AddPickScanHandler, AuthenticatedUser, CompletePickHandler, DeliveryCommandHandler,
        LoginUserHandler, LoginUserResponse, PackingCommandHandler, RegisterUserHandler,
        RegisterUserResponse, StagingCommandHandler, StartPickSessionHandler, StockCommandHandler,
        StockTakeResult,
    },
};

pub use error::ApplicationError;

pub use ports::{
    PasswordHasherPort, ProcParam, ProcedureError, ProcedureInvokerPort, ResultSet, Row,
    SecurityError, SessionClaims, TokenServicePort, TokenSubject,
};

pub use queries::{
    GetCurrentUser, GetPackageDetails, GetPackageItems, GetPackageSummary, GetRecentScans,
    GetStagedLines, ListDeliveryPackages, ListStockItems, PingDatabase, ValidatePackage,
    // Handlers
    handlers::{
        DeliveryPackageList, DeliveryQueryHandler, GetCurrentUserHandler, GetRecentScansHandler,
        GetStagedLinesHandler, ListStockItemsHandler, PackingQueryHandler, PingDatabaseHandler,
        ValidationReport,
    },
};
