use crate::models::TranslateRequest;

// Render the translation prompt. Each request field is substituted exactly
// once, in source/target/text order, with no transformation.
pub fn render_prompt(req: &TranslateRequest) -> String {
    format!(
        "You are a professional translator. Accurately convey the meaning and nuances \
of the original {} text while adhering to the grammar, vocabulary, and cultural \
sensitivities of {}. Produce only the translation, without any additional \
explanations or commentary. Translate the following text:\n\n{}",
        req.source, req.target, req.text
    )
}
