pub type CmdResult<T> = zui_scaffold::Result<(T, i32)>;

pub mod init;
