mod rgb;
