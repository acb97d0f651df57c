use poem_openapi::Tags;

#[derive(Debug, Tags)]
pub enum ApiTags {
    Health,
    Sessions,
    Connection,
    Chat,
    Content,
}
