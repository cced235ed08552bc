/// System message sent ahead of every analysis request.
pub const SYSTEM_PROMPT: &str = "You are a helpful healthcare package analyst.";

/// Fill the fixed analysis template with the scraped package text.
pub fn build_prompt(scraped: &str) -> String {
    format!(
        r#"You are a healthcare analyst. Analyze the following health package data scraped from a website.

For each package found, extract and present:
1. **Package Name**
2. **Number of Parameters/Tests included**
3. **Tests Included** (list them)
4. **Discounted Price (₹)**
5. **Original Price (₹)**
6. **Discount Percentage**

After listing all packages, provide:
- A **comparison table** in markdown
- **Star ratings** (⭐ out of 5) based on value for money (tests per rupee)
- **Recommendations** for:
  - 🧑 Young Adults
  - 👴 Senior Citizens
  - 💰 Budget-Friendly Option
  - 🏆 Best Overall Value

Here is the scraped data:
---
{scraped}
---

Format your response in clean markdown."#
    )
}
